// scalarust-core/src/ops/arithmetic/sub.rs

use crate::error::ScalarustError;
use crate::ops::Operation;
use crate::value::Value;

// --- Forward Operation ---

/// Computes `a - b`.
pub(crate) fn forward(a: &Value, b: &Value) -> Value {
    let data = a.data() - b.data();
    Value::from_operation(data, vec![a.clone(), b.clone()], Operation::Subtract)
}

// --- Backward Operation ---

/// d(a - b)/da = 1, d(a - b)/db = -1.
pub(crate) fn backward(a: &Value, b: &Value, output: &Value) {
    let grad = output.grad();
    a.add_grad(grad);
    b.add_grad(-grad);
}

/// Subtracts `b` from `a`, returning the new graph node.
pub fn sub_op(a: &Value, b: &Value) -> Result<Value, ScalarustError> {
    Operation::Subtract.forward(&[a.clone(), b.clone()])
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
