use crate::error::ScalarustError;
use crate::value::Value;
use approx::relative_eq;
use log::trace;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical:?} != numerical grad {numerical:?}")]
    GradientMismatch {
        input_index: usize,
        analytical: f32,
        numerical: f32,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f32,
        loss_minus: f32,
    },

    #[error("Gradient check input {input_index} must be a leaf node")]
    InputNotLeaf { input_index: usize },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarustError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarustError),
}

impl From<ScalarustError> for GradCheckError {
    fn from(err: ScalarustError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` must rebuild its graph from `inputs` on every call (it is called
/// once for the backward pass and twice per input for the differences).
/// Every input is perturbed by `±epsilon` and restored afterwards; the inputs'
/// `grad` fields are zeroed first and hold the analytical gradients on return.
///
/// A gradient passes when the two estimates agree within `tolerance`,
/// either absolutely or relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[Value],
    epsilon: f32,
    tolerance: f32,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarustError>,
{
    for (input_index, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index });
        }
        input.zero_grad();
    }

    // --- 1. Analytical gradients ---
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f32> = inputs.iter().map(Value::grad).collect();

    // --- 2. Numerical gradients ---
    for (input_index, input) in inputs.iter().enumerate() {
        let original = input.data();

        input.set_data(original + epsilon);
        let loss_plus = func(inputs).map(|out| out.data());
        input.set_data(original - epsilon);
        let loss_minus = func(inputs).map(|out| out.data());
        input.set_data(original);

        let (loss_plus, loss_minus) = (loss_plus?, loss_minus?);
        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let analytical_grad = analytical[input_index];
        trace!(
            "check_grad: input {} analytical={} numerical={}",
            input_index,
            analytical_grad,
            numerical
        );
        if !relative_eq!(
            analytical_grad,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical: analytical_grad,
                numerical,
            });
        }
    }
    Ok(())
}
