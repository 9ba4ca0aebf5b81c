use rand::SeedableRng;
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Random stream type used by every generator.
pub type SynthRng = rand_pcg::Pcg64;

/// Derive the seed of one catalog entry's random stream.
///
/// Streams depend only on `(run_seed, entry_name)`, never on generation order, so sequential and
/// parallel runs produce the same pixels.
pub fn entry_seed(run_seed: u64, entry_name: &str) -> u64 {
    xxh3_64_with_seed(entry_name.as_bytes(), run_seed)
}

pub fn entry_rng(run_seed: u64, entry_name: &str) -> SynthRng {
    SynthRng::seed_from_u64(entry_seed(run_seed, entry_name))
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
