// src/value/accessors.rs

use crate::ops::Operation;
use crate::value::Value;

impl Value {
    /// Returns the scalar held by this node.
    pub fn data(&self) -> f32 {
        self.read_data().data
    }

    /// Overwrites the scalar. Meant for optimizers, between backward passes.
    pub fn set_data(&self, data: f32) {
        self.write_data().data = data;
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f32 {
        self.read_data().grad
    }

    /// Overwrites the gradient.
    pub fn set_grad(&self, grad: f32) {
        self.write_data().grad = grad;
    }

    /// Accumulates `increment` into the gradient.
    ///
    /// Every backward contribution goes through here; contributions from
    /// different consumers of the same node sum up.
    pub fn add_grad(&self, increment: f32) {
        self.write_data().grad += increment;
    }

    /// Resets the gradient to 0.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Returns handles to the operands this node was computed from, in order.
    pub fn dependencies(&self) -> Vec<Value> {
        self.read_data().dependencies.clone()
    }

    /// Returns the operation that produced this node, `None` for leaves.
    pub fn operation(&self) -> Option<Operation> {
        self.read_data().operation
    }

    /// `true` for constants and parameters.
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }
}
