use crate::error::ScalarustError;
use crate::value::Value;

/// The base trait for all network modules (neurons, layers, whole networks).
///
/// Every learnable parameter is a leaf [`Value`]; the handles returned by
/// [`Module::parameters`] share their nodes with the module, so an optimizer
/// updating them updates the module.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, building new graph nodes on top of `inputs`
    /// and of the module's parameters.
    ///
    /// # Errors
    /// `InputSizeMismatch` when `inputs.len()` is not what the module expects.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarustError>;

    /// Returns all learnable parameters, weights before bias, in layer order.
    fn parameters(&self) -> Vec<Value>;

    /// Returns all learnable parameters along with their names.
    ///
    /// Names come from the parameters' labels (e.g. `"L0N1W2"`).
    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.parameters()
            .into_iter()
            .enumerate()
            .map(|(i, p)| (p.label().unwrap_or_else(|| format!("param{}", i)), p))
            .collect()
    }

    /// Total number of scalar parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
