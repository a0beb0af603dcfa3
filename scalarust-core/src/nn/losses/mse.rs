// scalarust-core/src/nn/losses/mse.rs

use crate::error::ScalarustError;
use crate::value::Value;
use log::trace;

/// Specifies the reduction applied to the squared errors: `Mean` or `Sum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

/// Computes the Mean Squared Error (MSE) loss between predictions and targets.
///
/// The loss is an ordinary graph node built from `-`, `*`, `+` and `/`, so
/// calling `backward` on it reaches the predictions and, through them, every
/// parameter that produced them.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    /// Creates a loss averaging the squared errors.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reduction(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node for `predictions` against `targets`.
    ///
    /// # Errors
    /// * `InputSizeMismatch` if the slices differ in length.
    /// * `EmptyInput` if both are empty.
    pub fn calculate(&self, predictions: &[Value], targets: &[Value]) -> Result<Value, ScalarustError> {
        if predictions.len() != targets.len() {
            return Err(ScalarustError::InputSizeMismatch {
                expected: predictions.len(),
                actual: targets.len(),
            });
        }
        let mut pairs = predictions.iter().zip(targets);
        let (first_pred, first_target) = pairs
            .next()
            .ok_or_else(|| ScalarustError::EmptyInput("MSELoss requires at least one prediction".to_string()))?;

        let squared_error = |p: &Value, t: &Value| {
            let diff = p - t;
            &diff * &diff
        };
        let mut total = squared_error(first_pred, first_target);
        for (p, t) in pairs {
            total = &total + &squared_error(p, t);
        }

        let loss = match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => (&total / predictions.len() as f32)?,
        };
        trace!("MSELoss({:?}) over {} pairs: {}", self.reduction, predictions.len(), loss.data());
        Ok(loss)
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
