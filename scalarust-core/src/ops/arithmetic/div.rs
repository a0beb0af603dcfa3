// scalarust-core/src/ops/arithmetic/div.rs

use crate::error::ScalarustError;
use crate::ops::Operation;
use crate::value::Value;

// --- Forward Operation ---

/// Computes `a / b`.
///
/// # Errors
/// `DivisionByZero` if `b` holds exactly zero. No node is created then.
pub(crate) fn forward(a: &Value, b: &Value) -> Result<Value, ScalarustError> {
    let divisor = b.data();
    if divisor == 0.0 {
        return Err(ScalarustError::DivisionByZero);
    }
    let data = a.data() / divisor;
    Ok(Value::from_operation(data, vec![a.clone(), b.clone()], Operation::Divide))
}

// --- Backward Operation ---

/// With `y = a / b`: dy/da = 1 / b and dy/db = -a / b² = -(y / b).
pub(crate) fn backward(a: &Value, b: &Value, output: &Value) {
    let grad = output.grad();
    let divisor = b.data();
    let quotient = output.data();
    a.add_grad((1.0 / divisor) * grad);
    b.add_grad(-(quotient / divisor) * grad);
}

/// Divides `a` by `b`, returning the new graph node.
pub fn div_op(a: &Value, b: &Value) -> Result<Value, ScalarustError> {
    Operation::Divide.forward(&[a.clone(), b.clone()])
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
