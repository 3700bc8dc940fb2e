// src/nn/layers/mod.rs

pub mod layer;
pub mod neuron;

pub use layer::Layer;
pub use neuron::Neuron;

#[cfg(test)]
mod neuron_test;
