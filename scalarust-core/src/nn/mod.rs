// src/nn/mod.rs
// Building blocks for small fully connected networks over scalar nodes.

pub mod init;
pub mod layers;
pub mod losses;
pub mod mlp;
pub mod module; // Trait Module

// Re-export common items
pub use init::WeightInit;
pub use layers::{Linear, Neuron};
pub use losses::MSELoss;
pub use mlp::Mlp;
pub use module::Module;
