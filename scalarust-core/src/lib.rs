//! # scalarust-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Every number taking part in a computation is a [`Value`]: a shared graph
//! node holding the scalar, its gradient and the operands it was computed
//! from. Arithmetic on values builds the graph; [`Value::backward`] walks it
//! in reverse topological order and fills in the gradients.
//!
//! ```
//! use scalarust_core::{make_value, ScalarustError};
//!
//! # fn main() -> Result<(), ScalarustError> {
//! let a = make_value(-2.0, Some("a"));
//! let b = make_value(3.0, Some("b"));
//! let f = &(&a * &b) * &(&a + &b);
//! f.backward()?;
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), -8.0);
//! # Ok(())
//! # }
//! ```
//!
//! On top of the engine sit small collaborators: fully connected networks
//! ([`nn`]), an SGD optimizer ([`optim`]) and a Graphviz export ([`viz`]).

// Core graph
pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

// Collaborators
pub mod nn;
pub mod optim;
pub mod viz;

pub mod error;

pub use error::ScalarustError;
pub use autograd::topological_sort;
pub use ops::{add_op, div_op, exp_op, mul_op, sub_op, tanh_op, Operation};
pub use value::{make_value, Value};
