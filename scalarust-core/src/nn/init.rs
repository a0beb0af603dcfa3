use crate::error::ScalarustError;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Distribution used to draw initial weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightInit {
    /// Uniform over the closed interval `[low, high]`.
    Uniform { low: f32, high: f32 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f32, std_dev: f32 },
}

impl Default for WeightInit {
    /// Uniform in `[-1, 1]`.
    fn default() -> Self {
        WeightInit::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl WeightInit {
    /// Checks the distribution parameters.
    ///
    /// # Errors
    /// `InvalidHyperparameter` for non-finite bounds, `low > high`, or a
    /// negative or non-finite standard deviation.
    pub fn validate(&self) -> Result<(), ScalarustError> {
        match *self {
            WeightInit::Uniform { low, high } => {
                if !low.is_finite() {
                    return Err(invalid("low", low));
                }
                if !high.is_finite() || high < low {
                    return Err(invalid("high", high));
                }
            }
            WeightInit::Normal { mean, std_dev } => {
                if !mean.is_finite() {
                    return Err(invalid("mean", mean));
                }
                if !std_dev.is_finite() || std_dev < 0.0 {
                    return Err(invalid("std_dev", std_dev));
                }
            }
        }
        Ok(())
    }

    /// Draws `count` weights from the distribution.
    pub fn sample_n<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<f32>, ScalarustError> {
        self.validate()?;
        let samples = match *self {
            WeightInit::Uniform { low, high } => {
                let dist = Uniform::new_inclusive(low, high);
                (0..count).map(|_| dist.sample(rng)).collect()
            }
            WeightInit::Normal { mean, std_dev } => {
                let dist = Normal::new(mean, std_dev).map_err(|_| invalid("std_dev", std_dev))?;
                (0..count).map(|_| dist.sample(rng)).collect()
            }
        };
        Ok(samples)
    }
}

fn invalid(name: &str, value: f32) -> ScalarustError {
    ScalarustError::InvalidHyperparameter {
        name: name.to_string(),
        value,
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
