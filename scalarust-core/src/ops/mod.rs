//! # Scalar Operations Module (`ops`)
//!
//! This module defines the closed set of differentiable operations the engine
//! knows about and the public functions that build graph nodes with them.
//!
//! ## Structure:
//!
//! - **[`Operation`]:** a plain enum over `{Add, Subtract, Multiply, Divide, Exp, Tanh}`.
//!   It is stored in every derived node and dispatches both the forward step
//!   (computing the output and wiring it to its operands) and the backward step
//!   (pushing the output's gradient into the operands).
//! - **Submodules:** one file per operation, grouped like the rest of the crate
//!   (`arithmetic`, `math_elem`, `activation`). Each holds the scalar rules and a
//!   fallible `xxx_op` function that goes through [`Operation::forward`].
//!
//! Operations carry no per-call state, so the variants are used by value.

use crate::error::ScalarustError;
use crate::value::Value;
use log::trace;
use std::fmt;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::tanh_op;
pub use arithmetic::{add_op, div_op, mul_op, sub_op};
pub use math_elem::exp_op;

/// A differentiable scalar function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exp,
    Tanh,
}

impl Operation {
    /// Number of operands the operation takes.
    pub fn arity(self) -> usize {
        match self {
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide => 2,
            Operation::Exp | Operation::Tanh => 1,
        }
    }

    /// Display tag used in diagnostics and in the DOT export.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Exp => "exp",
            Operation::Tanh => "tanh",
        }
    }

    fn check_arity(self, actual: usize) -> Result<(), ScalarustError> {
        if actual != self.arity() {
            return Err(ScalarustError::ArityMismatch {
                operation: self.name().to_string(),
                expected: self.arity(),
                actual,
            });
        }
        Ok(())
    }

    /// Computes the operation on `inputs` and returns the new node.
    ///
    /// The new node depends on exactly `inputs`, in the given order, and is
    /// tagged with this operation.
    ///
    /// # Errors
    /// * `ArityMismatch` if `inputs.len()` differs from [`Operation::arity`].
    /// * `DivisionByZero` for `Divide` when the second operand is exactly zero.
    ///
    /// No node is created on error.
    pub fn forward(self, inputs: &[Value]) -> Result<Value, ScalarustError> {
        self.check_arity(inputs.len())?;
        let output = match self {
            Operation::Add => arithmetic::add::forward(&inputs[0], &inputs[1]),
            Operation::Subtract => arithmetic::sub::forward(&inputs[0], &inputs[1]),
            Operation::Multiply => arithmetic::mul::forward(&inputs[0], &inputs[1]),
            Operation::Divide => arithmetic::div::forward(&inputs[0], &inputs[1])?,
            Operation::Exp => math_elem::exp::forward(&inputs[0]),
            Operation::Tanh => activation::tanh::forward(&inputs[0]),
        };
        trace!("forward {} -> {}", self, output.data());
        Ok(output)
    }

    /// Pushes `output`'s gradient into `inputs` with `add_grad`.
    ///
    /// `output.grad()` must already hold every contribution from `output`'s own
    /// consumers; the backward driver guarantees this by its ordering.
    pub fn backward(self, inputs: &[Value], output: &Value) -> Result<(), ScalarustError> {
        self.check_arity(inputs.len())?;
        match self {
            Operation::Add => arithmetic::add::backward(&inputs[0], &inputs[1], output),
            Operation::Subtract => arithmetic::sub::backward(&inputs[0], &inputs[1], output),
            Operation::Multiply => arithmetic::mul::backward(&inputs[0], &inputs[1], output),
            Operation::Divide => arithmetic::div::backward(&inputs[0], &inputs[1], output),
            Operation::Exp => math_elem::exp::backward(&inputs[0], output),
            Operation::Tanh => activation::tanh::backward(&inputs[0], output),
        }
        Ok(())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_arity() {
        let expected = [
            (Operation::Add, "+", 2),
            (Operation::Subtract, "-", 2),
            (Operation::Multiply, "*", 2),
            (Operation::Divide, "/", 2),
            (Operation::Exp, "exp", 1),
            (Operation::Tanh, "tanh", 1),
        ];
        for (op, name, arity) in expected {
            assert_eq!(op.name(), name);
            assert_eq!(op.to_string(), name);
            assert_eq!(op.arity(), arity);
        }
    }

    #[test]
    fn test_forward_arity_mismatch() {
        let a = Value::new(1.0);
        let b = Value::new(2.0);
        let c = Value::new(3.0);

        let err = Operation::Add.forward(&[a.clone()]).unwrap_err();
        assert_eq!(
            err,
            ScalarustError::ArityMismatch {
                operation: "+".to_string(),
                expected: 2,
                actual: 1
            }
        );
        assert!(matches!(
            Operation::Tanh.forward(&[a.clone(), b.clone()]),
            Err(ScalarustError::ArityMismatch { expected: 1, actual: 2, .. })
        ));
        assert!(matches!(
            Operation::Divide.forward(&[a, b, c]),
            Err(ScalarustError::ArityMismatch { expected: 2, actual: 3, .. })
        ));
        assert!(matches!(
            Operation::Exp.forward(&[]),
            Err(ScalarustError::ArityMismatch { expected: 1, actual: 0, .. })
        ));
    }

    #[test]
    fn test_backward_arity_mismatch_leaves_grads_untouched() {
        let a = Value::new(1.0);
        let out = Operation::Exp.forward(&[a.clone()]).unwrap();
        out.set_grad(1.0);
        let result = Operation::Multiply.backward(&[a.clone()], &out);
        assert!(matches!(result, Err(ScalarustError::ArityMismatch { .. })));
        assert_eq!(a.grad(), 0.0);
    }

    #[test]
    fn test_forward_wires_dependencies_in_order() {
        let a = Value::with_label(6.0, "a");
        let b = Value::with_label(3.0, "b");
        let out = Operation::Subtract.forward(&[a.clone(), b.clone()]).unwrap();
        assert_eq!(out.data(), 3.0);
        assert_eq!(out.operation(), Some(Operation::Subtract));
        assert_eq!(out.dependencies(), vec![a, b]);
        assert_eq!(out.grad(), 0.0);
        assert_eq!(out.label(), None);
    }
}
