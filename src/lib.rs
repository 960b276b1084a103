//! Argon2d/Argon2i memory-hard key derivation (RFC 9106).
//!
//! `Engine` is the main entry point: construct it with a secret and
//! salt, tune its cost parameters, optionally stream in message bytes,
//! and call `finalize` to fill the memory matrix and produce a tag.
//!
//! ```no_run
//! use argon2_engine::{Engine, Variant};
//!
//! let mut engine = Engine::construct(b"password", b"somesalt", None).unwrap();
//! engine.set_addressing(Variant::Argon2i);
//! let mut tag = [0u8; 32];
//! engine.finalize(&mut tag, 0).unwrap();
//! ```
//!
//! Only Argon2d and Argon2i are implemented; Argon2id is out of scope.

mod address;
mod block;
mod compress;
mod engine;
mod error;
mod finalize;
mod index;
mod pass;
mod prehash;
mod secret;
mod segment;
mod variant;
mod workers;

pub use crate::engine::{defaults, Engine};
pub use crate::error::{Error, Result};
pub use crate::variant::Variant;
