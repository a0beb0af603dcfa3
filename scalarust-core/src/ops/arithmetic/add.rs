// scalarust-core/src/ops/arithmetic/add.rs

use crate::error::ScalarustError;
use crate::ops::Operation;
use crate::value::Value;

// --- Forward Operation ---

/// Computes `a + b` and wires the result to both operands.
pub(crate) fn forward(a: &Value, b: &Value) -> Value {
    let data = a.data() + b.data();
    Value::from_operation(data, vec![a.clone(), b.clone()], Operation::Add)
}

// --- Backward Operation ---

/// d(a + b)/da = d(a + b)/db = 1, so both operands receive the output gradient.
pub(crate) fn backward(a: &Value, b: &Value, output: &Value) {
    let grad = output.grad();
    a.add_grad(grad);
    b.add_grad(grad);
}

/// Adds two nodes, returning the new graph node.
pub fn add_op(a: &Value, b: &Value) -> Result<Value, ScalarustError> {
    Operation::Add.forward(&[a.clone(), b.clone()])
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
