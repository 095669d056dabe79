use randnet_core::derive_substream_seed;

/// Derives the deterministic seed for the move proposal of a step.
pub fn move_seed(master_seed: u64, step: u32) -> u64 {
    derive_substream_seed(master_seed, (step as u64) << 1)
}

/// Derives the deterministic seed for the acceptance draw of a step.
pub fn accept_seed(master_seed: u64, step: u32) -> u64 {
    derive_substream_seed(master_seed, (step as u64) << 1 | 1)
}
