use rand::{rngs::StdRng, SeedableRng};

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub fn seed_for_match(base_seed: u64, match_index: u64) -> u64 {
    // Each match gets an independent deterministic stream.
    splitmix64(base_seed ^ match_index.wrapping_mul(0xD1B5_4A32_D192_ED03))
}

/// 매치마다 사용할 RNG. base_seed 가 없으면 OS 엔트로피를 사용합니다.
pub fn rng_for_match(base_seed: Option<u64>, match_index: u64) -> StdRng {
    match base_seed {
        Some(seed) => StdRng::seed_from_u64(seed_for_match(seed, match_index)),
        None => StdRng::from_entropy(),
    }
}
