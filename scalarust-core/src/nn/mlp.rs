use crate::error::ScalarustError;
use crate::nn::init::WeightInit;
use crate::nn::layers::Linear;
use crate::nn::module::Module;
use crate::value::Value;
use log::debug;
use rand::Rng;

/// A stack of [`Linear`] layers; layer `i` reads the outputs of layer `i - 1`.
///
/// The parameter list is collected once at construction. The parameter nodes
/// themselves are never replaced, so the cached handles stay valid.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Linear>,
    parameters: Vec<Value>,
}

impl Mlp {
    /// Creates a network taking `num_inputs` inputs, with one layer per entry
    /// of `layer_sizes`.
    pub fn new(num_inputs: usize, layer_sizes: &[usize]) -> Result<Self, ScalarustError> {
        Self::with_rng(
            num_inputs,
            layer_sizes,
            &WeightInit::default(),
            &mut rand::thread_rng(),
        )
    }

    pub fn with_rng<R: Rng + ?Sized>(
        num_inputs: usize,
        layer_sizes: &[usize],
        init: &WeightInit,
        rng: &mut R,
    ) -> Result<Self, ScalarustError> {
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut in_features = num_inputs;
        for (layer_index, &out_features) in layer_sizes.iter().enumerate() {
            layers.push(Linear::with_rng(in_features, out_features, layer_index, init, rng)?);
            in_features = out_features;
        }
        let parameters = layers.iter().flat_map(|l| l.parameters()).collect::<Vec<_>>();
        debug!(
            "Mlp: {} inputs, layers {:?}, {} parameters",
            num_inputs,
            layer_sizes,
            parameters.len()
        );
        Ok(Mlp { layers, parameters })
    }

    pub fn layers(&self) -> &[Linear] {
        &self.layers
    }

    /// Runs [`Module::forward`] on every sample, in order.
    pub fn forward_batch(&self, batch: &[Vec<Value>]) -> Result<Vec<Vec<Value>>, ScalarustError> {
        batch.iter().map(|sample| self.forward(sample)).collect()
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarustError> {
        let mut out = inputs.to_vec();
        for layer in &self.layers {
            out = layer.forward(&out)?;
        }
        Ok(out)
    }

    fn parameters(&self) -> Vec<Value> {
        self.parameters.clone()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
