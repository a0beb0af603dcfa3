// src/nn/layers/mod.rs

pub mod linear;
pub mod neuron;

// Re-export key layer structs
pub use linear::Linear;
pub use neuron::Neuron;
