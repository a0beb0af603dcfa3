use super::param_group::ParamGroup;
use crate::error::ScalarustError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Reads the `grad` of every managed parameter and overwrites its `data`.
    /// Must run after `backward`, never during it.
    fn step(&mut self) -> Result<(), ScalarustError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Gradients accumulate across backward passes, so this is typically called
    /// once per training iteration.
    fn zero_grad(&mut self);

    /// Adds a new parameter group to the optimizer.
    ///
    /// This allows specifying different hyperparameters (e.g., learning rate)
    /// for different sets of parameters within the same optimizer.
    fn add_param_group(&mut self, param_group: ParamGroup);

    /// Returns an immutable slice of the parameter groups managed by the optimizer.
    fn param_groups(&self) -> &[ParamGroup];

    /// Returns a mutable slice of the parameter groups managed by the optimizer.
    /// This allows modifying hyperparameters like the learning rate for each group.
    fn param_groups_mut(&mut self) -> &mut [ParamGroup];
}
