use crate::graph::{WUGraph, Weight};
use rand::prelude::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "log")]
use log::info;

/// Random graph on the vertices `0..order` where each pair `u < v` is an edge
/// with probability `density`, weighted uniformly from `0..=max_weight`.
///
/// The same seed always yields the same graph. A density outside `[0, 1]`
/// is clamped, NaN counts as zero.
pub fn random_graph(order: usize, density: f64, max_weight: Weight, seed: u64) -> WUGraph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    let max_weight = max_weight.max(0);
    let mut graph = WUGraph::with_capacity(order, expected_edges(order, density));
    for v in 0..order {
        graph.add_vertex(v);
    }
    for u in 0..order {
        for v in u + 1..order {
            if rng.gen_bool(density) {
                graph.add_edge(&u, &v, rng.gen_range(0..=max_weight));
            }
        }
    }
    #[cfg(feature = "log")]
    info!(
        "generated graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    graph
}

fn expected_edges(order: usize, density: f64) -> usize {
    let pairs = order.saturating_mul(order.saturating_sub(1)) / 2;
    (pairs as f64 * density) as usize
}
