//! Reverse-mode automatic differentiation machinery.
//!
//! - [`graph`]: orders the nodes reachable from a root so that each node's
//!   gradient is complete before it is propagated further.
//! - [`grad_check`]: compares analytic gradients with central finite differences.
//!
//! The backward driver itself is [`Value::backward`](crate::value::Value::backward).

pub mod grad_check;
pub mod graph;

pub use grad_check::{check_grad, GradCheckError};
pub use graph::{topological_sort, NodeId};
