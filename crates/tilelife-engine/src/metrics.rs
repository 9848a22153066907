//! Per-step performance and population metrics.
//!
//! [`StepMetrics`] captures timing, transition counts and memory for a
//! single step. The engine overwrites it after every `step()`; callers read
//! the most recent one through
//! [`StepEngine::last_metrics`](crate::StepEngine::last_metrics).

use tilelife_core::Generation;

/// Metrics collected during a single step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Generation reached by the step.
    pub generation: Generation,
    /// Wall-clock time for the whole step, in microseconds.
    pub total_us: u64,
    /// Regions processed.
    pub regions: usize,
    /// Live cells visited as neighbour sources.
    pub sources: usize,
    /// Dead cells that became live.
    pub births: u64,
    /// Live cells that became dead.
    pub deaths: u64,
    /// Live cells after the step.
    pub population: u64,
    /// Transient bytes used: scratch matrix plus both carries.
    pub scratch_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.generation, Generation(0));
        assert_eq!(m.total_us, 0);
        assert_eq!(m.regions, 0);
        assert_eq!(m.population, 0);
    }

    #[test]
    fn metrics_are_cloneable() {
        let m = StepMetrics {
            generation: Generation(4),
            births: 3,
            deaths: 3,
            population: 5,
            ..Default::default()
        };
        let c = m.clone();
        assert_eq!(c, m);
    }
}
