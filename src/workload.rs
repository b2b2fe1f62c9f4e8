//! Synthetic workload generation.
//!
//! Builds reproducible random process lists for demos, benchmarks and
//! property tests. Every generated list passes
//! [`validate_input`](crate::validation::validate_input) as long as the
//! configured ranges cannot overflow the clock.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Process;

/// Seeded generator of random process lists.
///
/// # Example
/// ```
/// use u_cpu_sched::workload::WorkloadGenerator;
///
/// let processes = WorkloadGenerator::new(5).with_seed(7).generate();
/// assert_eq!(processes.len(), 5);
/// assert_eq!(processes[0].name, "P1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    count: usize,
    max_arrival: i64,
    burst: (i64, i64),
    priority: (i32, i32),
    seed: u64,
}

impl WorkloadGenerator {
    /// Generator for `count` processes: arrivals in 0..=10, bursts in
    /// 1..=20, priorities in 1..=10, seed 0.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            burst: (1, 20),
            priority: (1, 10),
            seed: 0,
        }
    }

    /// Sets the latest possible arrival time (negative values clamp to 0).
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the inclusive burst range; bounds clamp to at least 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        let min = min.max(1);
        self.burst = (min, max.max(min));
        self
    }

    /// Sets the inclusive priority range; bounds clamp to at least 0.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        let min = min.max(0);
        self.priority = (min, max.max(min));
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the process list from the configured seed.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.generate_with(&mut rng)
    }

    /// Generates the process list from a caller-supplied RNG.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|n| {
                Process::new(format!("p{n}"))
                    .with_name(format!("P{n}"))
                    .with_arrival(rng.random_range(0..=self.max_arrival))
                    .with_burst(rng.random_range(self.burst.0..=self.burst.1))
                    .with_priority(rng.random_range(self.priority.0..=self.priority.1))
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(5)
    }
}
