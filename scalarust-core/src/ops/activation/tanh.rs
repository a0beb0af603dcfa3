// scalarust-core/src/ops/activation/tanh.rs

use crate::error::ScalarustError;
use crate::ops::Operation;
use crate::value::Value;

/// `tanh(x) = (e^{2x} - 1) / (e^{2x} + 1)`.
pub(crate) fn tanh_scalar(x: f32) -> f32 {
    let e2x = (2.0 * x).exp();
    // e^{2x} overflows f32 past x ~ 44; the limit is 1.
    if e2x.is_infinite() {
        return 1.0;
    }
    (e2x - 1.0) / (e2x + 1.0)
}

/// Computes `tanh(x)` as a single fused node (no intermediate `exp` node).
pub(crate) fn forward(x: &Value) -> Value {
    let data = tanh_scalar(x.data());
    Value::from_operation(data, vec![x.clone()], Operation::Tanh)
}

/// d(tanh x)/dx = 1 - tanh²(x), read off the output.
pub(crate) fn backward(x: &Value, output: &Value) {
    let grad = output.grad();
    let t = output.data();
    x.add_grad((1.0 - t * t) * grad);
}

/// Applies the hyperbolic tangent to a node.
pub fn tanh_op(x: &Value) -> Result<Value, ScalarustError> {
    Operation::Tanh.forward(&[x.clone()])
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
