//! The engine facade: owns configuration and sensitive buffers, and
//! drives the initializer → pass orchestrator → finalizer pipeline.
//!
//! State machine ported from the teacher's `Argon2`/`hash_impl` (which
//! collapses construction and hashing into one call) split into the
//! `Configured → Updating → Finalized → Disposed` lifecycle the
//! streaming API needs, plus a `reset()` this crate adds (see
//! `DESIGN.md` for the reasoning).

use crate::block::Matrix;
use crate::error::{Error, Result};
use crate::finalize::finalize as finalize_tag;
use crate::pass::run_passes;
use crate::prehash::{h0, seed_first_blocks};
use crate::secret::SecretBuffer;
use crate::segment::SLICES_PER_LANE;
use crate::variant::Variant;

const ARGON2_VERSION: u32 = 0x13;
const MIN_SALT_LEN: usize = 8;
const MIN_HASH_LEN: u32 = 4;

pub mod defaults {
    pub const TIME_COST: u32 = 3;
    pub const MEMORY_COST: u32 = 4096;
    pub const LANES: u32 = 1;
    pub const THREADS: u32 = 1;
    pub const HASH_LENGTH: u32 = 32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Configured,
    Updating,
    Finalized,
    Disposed,
}

/// An Argon2 key-derivation engine instance.
///
/// Construct with [`Engine::construct`], tune it with the setters,
/// optionally stream message bytes in with [`Engine::update`] /
/// [`Engine::update_block`], then call [`Engine::finalize`] to fill the
/// memory matrix and write the tag.
pub struct Engine {
    variant: Variant,
    hash_length: u32,
    memory_cost: u32,
    time_cost: u32,
    lanes: u32,
    threads: u32,

    secret: SecretBuffer,
    salt: SecretBuffer,
    ad: SecretBuffer,
    message: SecretBuffer,

    arena: Option<Matrix>,
    state: State,
}

impl Engine {
    /// Builds an engine in the `Configured` state. `ad` defaults to
    /// empty when `None`.
    pub fn construct(secret: &[u8], salt: &[u8], ad: Option<&[u8]>) -> Result<Engine> {
        if salt.len() < MIN_SALT_LEN {
            return Err(Error::SaltTooShort(salt.len()));
        }
        Ok(Engine {
            variant: Variant::Argon2i,
            hash_length: defaults::HASH_LENGTH,
            memory_cost: defaults::MEMORY_COST,
            time_cost: defaults::TIME_COST,
            lanes: defaults::LANES,
            threads: defaults::THREADS,
            secret: SecretBuffer::new(secret),
            salt: SecretBuffer::new(salt),
            ad: SecretBuffer::new(ad.unwrap_or(&[])),
            message: SecretBuffer::empty(),
            arena: None,
            state: State::Configured,
        })
    }

    pub fn set_addressing(&mut self, variant: Variant) -> &mut Self {
        self.variant = variant;
        self
    }

    pub fn set_hash_length(&mut self, hash_length: u32) -> &mut Self {
        self.hash_length = hash_length;
        self
    }

    pub fn set_memory_cost(&mut self, memory_cost: u32) -> &mut Self {
        self.memory_cost = memory_cost;
        self
    }

    pub fn set_time_cost(&mut self, time_cost: u32) -> &mut Self {
        self.time_cost = time_cost;
        self
    }

    pub fn set_lanes(&mut self, lanes: u32) -> &mut Self {
        self.lanes = lanes;
        self
    }

    pub fn set_threads(&mut self, threads: u32) -> &mut Self {
        self.threads = threads;
        self
    }

    /// Appends one byte to the message accumulator.
    pub fn update(&mut self, byte: u8) -> Result<()> {
        self.update_block(&[byte])
    }

    /// Appends `bytes` to the message accumulator.
    pub fn update_block(&mut self, bytes: &[u8]) -> Result<()> {
        if self.state == State::Disposed {
            return Err(Error::Disposed);
        }
        self.message.extend_from_slice(bytes);
        self.state = State::Updating;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.lanes == 0 {
            return Err(Error::ZeroLanes);
        }
        if self.threads == 0 {
            return Err(Error::ZeroThreads);
        }
        if self.time_cost == 0 {
            return Err(Error::ZeroTimeCost);
        }
        if self.memory_cost == 0 {
            return Err(Error::ZeroMemoryCost);
        }
        if self.hash_length < MIN_HASH_LEN {
            return Err(Error::HashLengthTooShort(self.hash_length));
        }
        Ok(())
    }

    /// The per-lane block count after raising `memoryCost` to the
    /// `2·SLICES_PER_LANE·lanes` floor and rounding down to a multiple
    /// of `SLICES_PER_LANE`, per RFC 9106 §3.2 step 1.
    fn normalized_lane_length(&self) -> u32 {
        let min_blocks = 2 * SLICES_PER_LANE * self.lanes;
        let memory_blocks = self.memory_cost.max(min_blocks);
        (memory_blocks / (SLICES_PER_LANE * self.lanes)) * SLICES_PER_LANE
    }

    /// Runs the full fill pipeline and writes `hashLength` bytes into
    /// `out[offset..offset + hashLength]`. Clears the message
    /// accumulator and moves the engine to `Finalized`.
    pub fn finalize(&mut self, out: &mut [u8], offset: usize) -> Result<()> {
        if self.state == State::Disposed {
            return Err(Error::Disposed);
        }
        self.validate()?;

        let hash_length = self.hash_length as usize;
        if out.len() < offset + hash_length {
            return Err(Error::OutputOutOfRange {
                offset,
                hash_length,
                buffer_len: out.len(),
            });
        }

        let lane_length = self.normalized_lane_length();
        let mut arena = Matrix::new(self.lanes, lane_length);

        let h0_buf = h0(
            self.lanes,
            self.hash_length,
            lane_length * self.lanes,
            self.time_cost,
            ARGON2_VERSION,
            self.variant,
            self.message.as_slice(),
            self.salt.as_slice(),
            self.secret.as_slice(),
            self.ad.as_slice(),
        );
        seed_first_blocks(&mut arena, h0_buf);
        run_passes(&mut arena, self.variant, self.time_cost, self.threads);
        finalize_tag(&arena, &mut out[offset..offset + hash_length]);

        self.message.clear();
        self.arena = Some(arena);
        self.state = State::Finalized;
        Ok(())
    }

    /// Clears the message accumulator and releases the arena, keeping
    /// the secret, salt, associated data, and configuration so
    /// `finalize` can be called again with a fresh arena.
    pub fn reset(&mut self) {
        self.message.clear();
        self.arena = None;
        self.state = State::Configured;
    }

    /// Zeroes and releases every sensitive buffer. The engine cannot be
    /// used again afterward.
    pub fn dispose(&mut self) {
        self.message.clear();
        self.secret.clear();
        self.salt.clear();
        self.ad.clear();
        self.arena = None;
        self.state = State::Disposed;
    }
}
