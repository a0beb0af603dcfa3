// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear activations used by the network layer. Each one is a single
//! fused operation with a closed-form derivative, not a composition of other
//! graph nodes.
//!
//! ## Currently Implemented:
//! - [`tanh`](tanh/fn.tanh_op.html): hyperbolic tangent.

pub mod tanh;

// Re-export key functions
pub use tanh::tanh_op;
