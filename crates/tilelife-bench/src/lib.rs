//! Benchmark profiles for the tilelife step engine.
//!
//! Provides seeded grids for benchmarking and examples:
//!
//! - [`device_profile`]: the 96x64 screen the engine was sized for
//! - [`stress_profile`]: 512x512 (~262K cells) for throughput comparisons
//! - [`STRATEGIES`]: the partitionings every benchmark compares

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tilelife_core::BitPlane;
use tilelife_engine::{EngineConfig, PartitionStrategy, StepEngine};
use tilelife_test_utils::fixtures::random_soup;

/// Live-cell density used by every profile.
pub const SOUP_DENSITY: f64 = 0.35;

/// Strategies compared by the step benchmarks, with display labels.
pub const STRATEGIES: [(&str, PartitionStrategy); 4] = [
    ("whole", PartitionStrategy::Whole),
    ("strip8", PartitionStrategy::Strip { rows: 8 }),
    ("block30x25", PartitionStrategy::Block { rows: 30, cols: 25 }),
    ("auto256", PartitionStrategy::Auto { scratch_bytes: 256 }),
];

/// A 64x96 random soup.
pub fn device_profile(seed: u64) -> BitPlane {
    random_soup(
        EngineConfig::DEVICE_ROWS,
        EngineConfig::DEVICE_COLS,
        SOUP_DENSITY,
        seed,
    )
}

/// A 512x512 random soup.
pub fn stress_profile(seed: u64) -> BitPlane {
    random_soup(512, 512, SOUP_DENSITY, seed)
}

/// An engine over `plane` using `strategy`.
///
/// # Panics
///
/// Panics if `strategy` is invalid for the plane's geometry.
pub fn engine_for(plane: &BitPlane, strategy: PartitionStrategy) -> StepEngine {
    let config = EngineConfig::new(plane.rows(), plane.cols()).with_strategy(strategy);
    StepEngine::with_plane(config, plane.clone()).expect("benchmark strategy must be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_deterministic() {
        assert_eq!(device_profile(1), device_profile(1));
        assert_eq!(device_profile(1).cols(), 96);
    }

    #[test]
    fn every_strategy_builds_and_agrees() {
        let plane = device_profile(3);
        let mut outputs = Vec::new();
        for (_, strategy) in STRATEGIES {
            let mut engine = engine_for(&plane, strategy);
            engine.step_n(3);
            outputs.push(engine.current().clone());
        }
        assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    }
}
