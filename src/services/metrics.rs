//! Simulated health metrics attached to each check-in.
//!
//! The values carry no semantic weight beyond falling in their
//! documented ranges; randomness is injected so tests can seed it.

use rand::Rng;

#[derive(Debug, Clone, Copy)]
pub struct HealthMetrics {
    /// Beats per minute, 60-99.
    pub heart_rate: u8,
    /// 4-9 on a ten-point scale.
    pub sleep_quality: u8,
    /// 2-8 on a ten-point scale.
    pub stress_level: u8,
}

pub fn simulate<R: Rng>(rng: &mut R) -> HealthMetrics {
    HealthMetrics {
        heart_rate: rng.gen_range(60..100),
        sleep_quality: rng.gen_range(4..10),
        stress_level: rng.gen_range(2..9),
    }
}
