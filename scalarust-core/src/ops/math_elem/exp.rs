// scalarust-core/src/ops/math_elem/exp.rs

use crate::error::ScalarustError;
use crate::ops::Operation;
use crate::value::Value;

/// Computes `e^x`.
pub(crate) fn forward(x: &Value) -> Value {
    let data = x.data().exp();
    Value::from_operation(data, vec![x.clone()], Operation::Exp)
}

/// d(e^x)/dx = e^x, which is the output itself.
pub(crate) fn backward(x: &Value, output: &Value) {
    let grad = output.grad();
    x.add_grad(output.data() * grad);
}

/// Computes the natural exponential of a node.
///
/// For a raw scalar, wrap it first: `exp_op(&Value::new(x))`.
pub fn exp_op(x: &Value) -> Result<Value, ScalarustError> {
    Operation::Exp.forward(&[x.clone()])
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
