// scalarust-core/src/optim/mod.rs

//! Optimizers for training networks built from scalar nodes.
//!
//! This module provides the `Optimizer` trait, the `ParamGroup` holding a set
//! of parameters with their hyperparameters, the `SgdOptimizer`, and gradient
//! clipping helpers meant to run between `backward` and `step`.

pub mod grad_clipping;
pub mod optimizer_trait;
pub mod param_group;
pub mod sgd;

// Re-export key items for easier access
pub use grad_clipping::{clip_grad_norm, clip_grad_value};
pub use optimizer_trait::Optimizer;
pub use param_group::ParamGroup;
pub use sgd::SgdOptimizer;
