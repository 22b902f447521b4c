//! Flow certificate checks.

use super::types::{FlowNetwork, FlowSolution, MinCut};
use crate::validation::{Verdict, Violation};
use std::collections::VecDeque;

/// Derives the cut separating nodes still reachable from the source in
/// the residual graph of `solution`.
///
/// When `solution` is a maximum flow, the sink is on the far side and the
/// cut capacity equals the flow value.
pub fn min_cut(network: &FlowNetwork, solution: &FlowSolution) -> MinCut {
    let n = network.num_nodes();
    let mut out: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, e) in network.edges().iter().enumerate() {
        let flow = solution.edge_flows.get(i).copied().unwrap_or(0);
        if flow < e.capacity {
            out[e.from].push(e.to);
        }
        if flow > 0 {
            out[e.to].push(e.from);
        }
    }

    let mut source_side = vec![false; n];
    let mut queue = VecDeque::from([network.source()]);
    source_side[network.source()] = true;
    while let Some(u) = queue.pop_front() {
        for &v in &out[u] {
            if !source_side[v] {
                source_side[v] = true;
                queue.push_back(v);
            }
        }
    }

    let edges: Vec<usize> = network
        .edges()
        .iter()
        .enumerate()
        .filter(|(_, e)| source_side[e.from] && !source_side[e.to])
        .map(|(i, _)| i)
        .collect();
    let capacity = edges.iter().map(|&i| network.edges()[i].capacity).sum();

    MinCut {
        source_side,
        edges,
        capacity,
    }
}

/// Checks capacity limits, conservation at every inner node, the
/// reported value, and maximality via residual reachability.
pub fn validate_flow(network: &FlowNetwork, solution: &FlowSolution) -> Verdict {
    let edges = network.edges();
    if solution.edge_flows.len() != edges.len() {
        return Err(Violation::Shape(format!(
            "{} edge flows for {} edges",
            solution.edge_flows.len(),
            edges.len()
        )));
    }

    let n = network.num_nodes();
    let mut inflow = vec![0u64; n];
    let mut outflow = vec![0u64; n];
    for (i, (e, &flow)) in edges.iter().zip(&solution.edge_flows).enumerate() {
        if flow > e.capacity {
            return Err(Violation::CapacityExceeded {
                edge: i,
                flow,
                capacity: e.capacity,
            });
        }
        outflow[e.from] += flow;
        inflow[e.to] += flow;
    }

    for node in 0..n {
        if node == network.source() || node == network.sink() {
            continue;
        }
        if inflow[node] != outflow[node] {
            return Err(Violation::ConservationBroken {
                node,
                inflow: inflow[node],
                outflow: outflow[node],
            });
        }
    }

    let s = network.source();
    let actual = outflow[s].saturating_sub(inflow[s]);
    if actual != solution.value || inflow[s] > outflow[s] {
        return Err(Violation::FlowValueMismatch {
            reported: solution.value,
            actual,
        });
    }

    let cut = min_cut(network, solution);
    if cut.source_side[network.sink()] {
        return Err(Violation::AugmentingPathRemains);
    }
    if cut.capacity != solution.value {
        return Err(Violation::CutMismatch {
            cut: cut.capacity,
            flow: solution.value,
        });
    }
    Ok(())
}
