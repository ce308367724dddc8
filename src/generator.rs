// Seeded random instance source for benchmarks and tests
//
// Construction mirrors the shape of real workloads: every vertex covers
// itself, roughly n*ratio random undirected edges on top, one group per
// vertex plus roughly n*ratio extra memberships, and weights jittered
// around 1.0. Instances built here always satisfy the structural
// preconditions checked by `Instance::validate`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::instance::Instance;

/// Parameters for random instance generation.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Number of vertices.
    pub vertices: usize,
    /// Number of groups.
    pub groups: usize,
    /// Edge and extra-membership count as a fraction of the vertex count.
    pub ratio: f64,
    /// RNG seed, so instances are reproducible across runs.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vertices: 1000,
            groups: 100,
            ratio: 1.2,
            seed: 0,
        }
    }
}

/// Generate a random instance from the given configuration.
pub fn random_instance(config: &GeneratorConfig) -> Instance {
    let n = config.vertices.max(1);
    let m = config.groups.max(1);
    let extra = (n as f64 * config.ratio) as usize;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let weights: Vec<f64> = (0..m)
        .map(|_| 1.0 + 0.01 * rng.random_range(-1.0..1.0))
        .collect();

    // Self-loops first, then random undirected edges, skipping duplicates.
    let mut adjacency: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
    for _ in 0..extra {
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        if !adjacency[i].contains(&j) {
            adjacency[i].push(j);
            adjacency[j].push(i);
        }
    }

    // One group per vertex, then random extra memberships.
    let mut groups: Vec<Vec<usize>> = (0..n)
        .map(|_| vec![rng.random_range(0..m)])
        .collect();
    for _ in 0..extra {
        let i = rng.random_range(0..n);
        let k = rng.random_range(0..m);
        if !groups[i].contains(&k) {
            groups[i].push(k);
        }
    }

    Instance::new(adjacency, groups, weights)
}
