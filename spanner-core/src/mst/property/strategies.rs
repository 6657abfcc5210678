//! Strategy builders for MST property-based tests.
//!
//! Graphs are generated from a seeded [`SmallRng`] so failures shrink to a
//! reproducible seed. Connected fixtures grow a random spanning backbone
//! first and sprinkle extra edges over it; disconnected fixtures build two
//! islands with no crossing edges.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Minimum vertex count for generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for generated graphs.
const MAX_VERTICES: usize = 48;

/// How edge weights are drawn.
#[derive(Clone, Copy, Debug)]
pub(super) enum WeightDistribution {
    /// Distinct weights, so the MST is unique.
    Unique,
    /// Weights drawn from {1, 2, 3}, stressing tie-breaking.
    ManyIdentical,
}

/// A generated graph plus the facts the properties assert against.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub(super) vertex_count: usize,
    pub(super) triples: Vec<(usize, usize, i64)>,
    pub(super) distribution: WeightDistribution,
}

/// A disconnected fixture: two islands, vertex 0 in the first.
#[derive(Clone, Debug)]
pub(super) struct SplitFixture {
    pub(super) vertex_count: usize,
    pub(super) triples: Vec<(usize, usize, i64)>,
    /// Number of vertices in the island containing vertex 0.
    pub(super) first_island: usize,
}

fn weight_distribution_strategy() -> impl Strategy<Value = WeightDistribution> {
    prop_oneof![
        Just(WeightDistribution::Unique),
        Just(WeightDistribution::ManyIdentical),
    ]
}

/// Generates connected graphs across both weight distributions.
pub(super) fn connected_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (weight_distribution_strategy(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_connected(distribution, &mut rng)
    })
}

/// Generates two-island graphs with vertex 0 in the first island.
pub(super) fn split_fixture_strategy() -> impl Strategy<Value = SplitFixture> {
    any::<u64>().prop_map(|seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_split(&mut rng)
    })
}

fn draw_weight(distribution: WeightDistribution, ordinal: usize, rng: &mut SmallRng) -> i64 {
    match distribution {
        // Distinct by construction: a strictly increasing base jittered into
        // disjoint bands.
        WeightDistribution::Unique => (ordinal as i64) * 10 + rng.gen_range(0..10),
        WeightDistribution::ManyIdentical => rng.gen_range(1..=3),
    }
}

fn generate_connected(distribution: WeightDistribution, rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut triples = backbone(0, vertex_count, distribution, rng);

    let extras = rng.gen_range(0..=vertex_count * 2);
    for _ in 0..extras {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        if source == target {
            continue;
        }
        let weight = draw_weight(distribution, triples.len(), rng);
        triples.push((source, target, weight));
    }

    GraphFixture {
        vertex_count,
        triples,
        distribution,
    }
}

fn generate_split(rng: &mut SmallRng) -> SplitFixture {
    let first_island = rng.gen_range(1..=8);
    let second_island = rng.gen_range(1..=8);
    let vertex_count = first_island + second_island;

    let mut triples = backbone(0, first_island, WeightDistribution::ManyIdentical, rng);
    triples.extend(backbone(
        first_island,
        second_island,
        WeightDistribution::ManyIdentical,
        rng,
    ));

    SplitFixture {
        vertex_count,
        triples,
        first_island,
    }
}

/// Connects `count` vertices starting at `base` into one component by
/// attaching each new vertex to a random earlier one.
fn backbone(
    base: usize,
    count: usize,
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> Vec<(usize, usize, i64)> {
    let mut triples = Vec::with_capacity(count.saturating_sub(1));
    for offset in 1..count {
        let earlier = rng.gen_range(0..offset);
        let weight = draw_weight(distribution, base + triples.len(), rng);
        triples.push((base + earlier, base + offset, weight));
    }
    triples
}
