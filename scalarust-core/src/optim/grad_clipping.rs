use crate::error::ScalarustError;
use crate::value::Value;
use log::debug;

/// Clips the gradient of every parameter into `[-clip_value, clip_value]`.
///
/// # Errors
///
/// Returns `InvalidHyperparameter` if `clip_value` is negative or not finite.
pub fn clip_grad_value(parameters: &[Value], clip_value: f32) -> Result<(), ScalarustError> {
    if !clip_value.is_finite() || clip_value < 0.0 {
        return Err(ScalarustError::InvalidHyperparameter {
            name: "clip_value".to_string(),
            value: clip_value,
        });
    }
    for param in parameters {
        param.set_grad(param.grad().clamp(-clip_value, clip_value));
    }
    Ok(())
}

/// Clips the overall L2 norm of the gradients of `parameters` in place.
///
/// The gradients are viewed as a single vector; if its norm exceeds
/// `max_norm`, all gradients are scaled down by a common factor.
/// Returns the norm measured before clipping.
///
/// # Errors
///
/// Returns `InvalidHyperparameter` if `max_norm` is not strictly positive and finite.
pub fn clip_grad_norm(parameters: &[Value], max_norm: f32) -> Result<f32, ScalarustError> {
    if !max_norm.is_finite() || max_norm <= 0.0 {
        return Err(ScalarustError::InvalidHyperparameter {
            name: "max_norm".to_string(),
            value: max_norm,
        });
    }

    let total_norm = parameters
        .iter()
        .map(|p| p.grad() * p.grad())
        .sum::<f32>()
        .sqrt();

    if total_norm > max_norm {
        let clip_coef = max_norm / total_norm;
        debug!(
            "clip_grad_norm: total norm {} > {}, scaling by {}",
            total_norm, max_norm, clip_coef
        );
        for param in parameters {
            param.set_grad(param.grad() * clip_coef);
        }
    }
    Ok(total_norm)
}

#[cfg(test)]
#[path = "grad_clipping_test.rs"]
mod tests;
