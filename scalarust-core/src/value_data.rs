// src/value_data.rs

use crate::ops::Operation;
use crate::value::Value;
use std::rc::Rc;

/// Internal storage for a node of the computation graph.
///
/// This struct holds the scalar, its accumulated gradient and the provenance
/// of the node (the operands it was computed from and the operation that did it).
/// It is wrapped in `Rc<RefCell<ValueData>>` by the `Value` handle to allow
/// shared ownership and interior mutability.
#[derive(Debug)]
pub struct ValueData {
    /// Current scalar value. Only training code overwrites it, between passes.
    pub(crate) data: f32,
    /// Gradient of some downstream root with respect to this node.
    /// Starts at 0 and grows through `add_grad` during backward passes.
    pub(crate) grad: f32,
    /// Operands that produced this node, in operation order. Empty for leaves.
    pub(crate) dependencies: Vec<Value>,
    /// Operation that produced this node. `None` for leaves (constants, parameters).
    pub(crate) operation: Option<Operation>,
    /// Purely diagnostic name, used by logs and the DOT export.
    pub(crate) label: Option<String>,
}

impl ValueData {
    /// Creates the data of a leaf node.
    pub(crate) fn leaf(data: f32, label: Option<String>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            dependencies: Vec::new(),
            operation: None,
            label,
        }
    }

    /// Creates the data of a node produced by `operation` from `dependencies`.
    pub(crate) fn derived(data: f32, dependencies: Vec<Value>, operation: Operation) -> Self {
        ValueData {
            data,
            grad: 0.0,
            dependencies,
            operation: Some(operation),
            label: None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.operation.is_none()
    }
}

impl Drop for ValueData {
    /// Frees the dependency chain iteratively, so stack depth does not grow
    /// with graph depth. A dependency this node owns last hands its own
    /// dependencies to the work stack before it is freed.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.dependencies);
        while let Some(value) = stack.pop() {
            if let Ok(cell) = Rc::try_unwrap(value.node) {
                let mut data = cell.into_inner();
                stack.append(&mut data.dependencies);
            }
        }
    }
}
