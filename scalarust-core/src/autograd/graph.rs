use crate::error::ScalarustError;
use crate::value::Value;
use crate::value_data::ValueData;
use log::debug;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

/// Identity of a graph node: the address of its shared `RefCell<ValueData>`.
///
/// Stable while any handle keeps the node alive, which the sorter's own
/// handles guarantee for the duration of a pass.
pub type NodeId = *const RefCell<ValueData>;

/// Orders every node reachable from `root` for the backward pass.
///
/// The first element is `root`. A node is emitted only after all of its
/// consumers inside the reachable subgraph, so when the driver reaches it
/// its gradient has received every contribution. Each node appears once,
/// however many consumers share it.
///
/// The ordering is Kahn's algorithm on consumer counts:
/// 1. Walk the dependencies from `root`, counting for each node how many times
///    it is listed as a dependency (one per occurrence, so `a + a` counts twice).
/// 2. Seed the queue with the nodes whose count is 0 (just `root` in an acyclic graph).
/// 3. Pop a node, emit it, decrement the count of each of its dependencies and
///    enqueue those reaching 0.
///
/// # Errors
/// `CycleDetected` if fewer nodes are emitted than were discovered. The public
/// construction API cannot build a cycle, so this means a corrupted graph.
pub fn topological_sort(root: &Value) -> Result<Vec<Value>, ScalarustError> {
    let mut discovered: Vec<Value> = vec![root.clone()];
    let mut consumer_counts: HashMap<NodeId, usize> = HashMap::new();
    consumer_counts.insert(root.node_id(), 0);

    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        for dependency in node.dependencies() {
            let count = consumer_counts.entry(dependency.node_id()).or_insert(0);
            let first_visit = *count == 0 && dependency != *root;
            *count += 1;
            if first_visit {
                discovered.push(dependency.clone());
                stack.push(dependency);
            }
        }
    }

    let mut queue: VecDeque<Value> = discovered
        .iter()
        .filter(|node| consumer_counts.get(&node.node_id()) == Some(&0))
        .cloned()
        .collect();
    let mut sorted = Vec::with_capacity(discovered.len());

    while let Some(node) = queue.pop_front() {
        for dependency in node.dependencies() {
            if let Some(count) = consumer_counts.get_mut(&dependency.node_id()) {
                *count -= 1;
                if *count == 0 {
                    queue.push_back(dependency);
                }
            }
        }
        sorted.push(node);
    }

    debug!(
        "topological_sort: discovered {} nodes, ordered {}",
        discovered.len(),
        sorted.len()
    );

    if sorted.len() < discovered.len() {
        return Err(ScalarustError::CycleDetected {
            discovered: discovered.len(),
            emitted: sorted.len(),
        });
    }
    Ok(sorted)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
