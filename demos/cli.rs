use argon2_engine::{Engine, Variant};
use std::env;

const HASH_LEN: u32 = 32;

fn hash(msg: &[u8], salt: &[u8], passes: u32, lanes: u32, logkib: u32) -> [u8; HASH_LEN as usize] {
    assert!(salt.len() >= 8 && passes > 0 && logkib > 0 && lanes > 0);

    let mut engine = Engine::construct(&[], salt, None).expect("salt is at least 8 bytes");
    engine
        .set_addressing(Variant::Argon2i)
        .set_hash_length(HASH_LEN)
        .set_time_cost(passes)
        .set_lanes(lanes)
        .set_memory_cost(1 << logkib);
    engine.update_block(msg).expect("message buffer is unbounded");

    let mut out = [0u8; HASH_LEN as usize];
    engine.finalize(&mut out, 0).expect("parameters were validated above");
    out
}

fn to_hex(bytes: &[u8]) -> String {
    let mut rv = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        rv.push_str(&format!("{b:02x}"));
    }
    rv
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 6 {
        eprintln!("usage: {} passes lanes logkib msg salt", args[0]);
        std::process::exit(1);
    }

    let passes: u32 = args[1].parse().expect("passes must be a positive integer");
    let lanes: u32 = args[2].parse().expect("lanes must be a positive integer");
    let logkib: u32 = args[3].parse().expect("logkib must be a positive integer");
    let msg = args[4].as_bytes();
    let salt = args[5].as_bytes();

    println!("Hash: {}", to_hex(&hash(msg, salt, passes, lanes, logkib)));
}
