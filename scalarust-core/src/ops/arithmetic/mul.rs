// scalarust-core/src/ops/arithmetic/mul.rs

use crate::error::ScalarustError;
use crate::ops::Operation;
use crate::value::Value;

// --- Forward Operation ---

/// Computes `a * b`.
pub(crate) fn forward(a: &Value, b: &Value) -> Value {
    let data = a.data() * b.data();
    Value::from_operation(data, vec![a.clone(), b.clone()], Operation::Multiply)
}

// --- Backward Operation ---

/// Product rule: d(a * b)/da = b, d(a * b)/db = a.
pub(crate) fn backward(a: &Value, b: &Value, output: &Value) {
    let grad = output.grad();
    // Read both operands before writing: `a` and `b` may be the same node.
    let (a_data, b_data) = (a.data(), b.data());
    a.add_grad(b_data * grad);
    b.add_grad(a_data * grad);
}

/// Multiplies two nodes, returning the new graph node.
pub fn mul_op(a: &Value, b: &Value) -> Result<Value, ScalarustError> {
    Operation::Multiply.forward(&[a.clone(), b.clone()])
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
