//! Random flow network generation.

use super::config::FlowConfig;
use super::types::{FlowEdge, FlowNetwork};
use crate::error::Result;
use crate::random::create_rng;
use rand::Rng;

/// Generates a network according to `config`.
///
/// Edges only run from lower to higher node index. After the random pass,
/// every non-sink node is given an outgoing edge and every non-source node
/// an incoming one if it lacks them, so every node lies on some
/// source-to-sink route.
pub fn generate_network(config: &FlowConfig) -> Result<FlowNetwork> {
    config.validate()?;
    let mut rng = create_rng(config.seed);

    if config.traffic_preset {
        return Ok(FlowNetwork::traffic_preset(&mut rng));
    }

    let n = config.num_nodes;
    let (lo, hi) = (config.min_capacity, config.max_capacity);
    let mut edges = Vec::new();
    let mut has_out = vec![false; n];
    let mut has_in = vec![false; n];

    for u in 0..n {
        for v in (u + 1)..n {
            if rng.random_bool(config.edge_density) {
                edges.push(FlowEdge {
                    from: u,
                    to: v,
                    capacity: rng.random_range(lo..=hi),
                });
                has_out[u] = true;
                has_in[v] = true;
            }
        }
    }

    for u in 0..n - 1 {
        if !has_out[u] {
            let v = rng.random_range(u + 1..n);
            edges.push(FlowEdge {
                from: u,
                to: v,
                capacity: rng.random_range(lo..=hi),
            });
            has_in[v] = true;
        }
    }
    for v in 1..n {
        if !has_in[v] {
            let u = rng.random_range(0..v);
            edges.push(FlowEdge {
                from: u,
                to: v,
                capacity: rng.random_range(lo..=hi),
            });
        }
    }

    log::trace!("generated flow network: {n} nodes, {} edges", edges.len());
    FlowNetwork::new(n, edges, 0, n - 1)
}
