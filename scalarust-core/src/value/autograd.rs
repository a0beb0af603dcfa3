// src/value/autograd.rs

use crate::autograd::graph::topological_sort;
use crate::error::ScalarustError;
use crate::value::Value;
use log::{debug, trace};

impl Value {
    /// Computes the gradient of this node with respect to every node it
    /// depends on, directly or transitively.
    ///
    /// The reachable nodes are ordered with [`topological_sort`] (this node
    /// first, each node after all of its consumers). Derived nodes have their
    /// gradient reset to 0, this node is seeded with 1.0, then each derived
    /// node pushes its gradient into its operands through its operation's
    /// backward rule. Leaves are skipped as there is nothing upstream of them.
    ///
    /// Leaves are never reset: calling `backward` again without zeroing them
    /// adds the same contributions a second time.
    ///
    /// # Errors
    /// * `CycleDetected` if the graph is cyclic. No gradient is touched then.
    /// * `ArityMismatch` if a node's operand list does not fit its operation.
    pub fn backward(&self) -> Result<(), ScalarustError> {
        let sorted = topological_sort(self)?;
        debug!("backward: {} reachable nodes", sorted.len());

        for node in sorted.iter().filter(|node| !node.is_leaf()) {
            node.zero_grad();
        }
        self.set_grad(1.0);

        for node in &sorted {
            let (operation, dependencies) = {
                let vd = node.read_data();
                (vd.operation, vd.dependencies.clone())
            };
            if let Some(op) = operation {
                trace!(
                    "backward: {} {:?} grad={}",
                    op,
                    node.label(),
                    node.grad()
                );
                op.backward(&dependencies, node)?;
            }
        }

        debug!("backward: done");
        Ok(())
    }
}

#[cfg(test)]
#[path = "autograd_test.rs"]
mod tests;
