// src/value/mod.rs

use crate::autograd::graph::NodeId;
use crate::ops::Operation;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod accessors;
mod arithmetic;
mod autograd;
mod traits;

/// A scalar node of the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** any number of consumers can reference the same
///     upstream node (this is how `a + a` reuses `a`), and cloning a `Value`
///     only clones the handle.
/// 2.  **Interior Mutability:** `grad` and `data` can be updated through an
///     immutable handle during a backward pass or an optimizer step.
///
/// Equality and hashing follow node identity, not the stored scalar.
pub struct Value {
    pub(crate) node: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a new unlabeled leaf.
    pub fn new(data: f32) -> Self {
        Value::from_data(ValueData::leaf(data, None))
    }

    /// Creates a new labeled leaf.
    pub fn with_label(data: f32, label: impl Into<String>) -> Self {
        Value::from_data(ValueData::leaf(data, Some(label.into())))
    }

    /// Wires a freshly computed node into the graph.
    pub(crate) fn from_operation(data: f32, dependencies: Vec<Value>, operation: Operation) -> Self {
        Value::from_data(ValueData::derived(data, dependencies, operation))
    }

    fn from_data(data: ValueData) -> Self {
        Value {
            node: Rc::new(RefCell::new(data)),
        }
    }

    /// Borrows the node's data immutably.
    ///
    /// Panics if the node is currently mutably borrowed, which the engine never
    /// does across calls.
    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.node.borrow()
    }

    /// Borrows the node's data mutably.
    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.node.borrow_mut()
    }

    /// Identity of the node, stable for as long as any handle keeps it alive.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.node)
    }
}

/// Creates a leaf node, optionally labeled.
pub fn make_value(data: f32, label: Option<&str>) -> Value {
    match label {
        Some(label) => Value::with_label(data, label),
        None => Value::new(data),
    }
}
