// src/nn/mod.rs
// Neural network building blocks composed purely from scalar operations.

pub mod activation;
pub mod init;
pub mod layers;
pub mod mlp;
pub mod module;

pub use activation::Activation;
pub use layers::{Layer, Neuron};
pub use mlp::Mlp;
pub use module::{Module, Output};
