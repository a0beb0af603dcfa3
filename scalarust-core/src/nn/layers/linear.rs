use crate::error::ScalarustError;
use crate::nn::init::WeightInit;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A fully connected layer: `num_outputs` neurons that all read the same inputs.
#[derive(Debug, Clone)]
pub struct Linear {
    neurons: Vec<Neuron>,
    in_features: usize,
    layer_index: usize,
}

impl Linear {
    /// Creates a new Linear layer.
    ///
    /// # Arguments
    ///
    /// * `in_features` - Number of inputs each neuron reads.
    /// * `out_features` - Number of neurons, i.e. of outputs.
    /// * `layer_index` - Position of the layer in its network, used in parameter labels.
    pub fn new(
        in_features: usize,
        out_features: usize,
        layer_index: usize,
    ) -> Result<Self, ScalarustError> {
        Self::with_rng(
            in_features,
            out_features,
            layer_index,
            &WeightInit::default(),
            &mut rand::thread_rng(),
        )
    }

    pub fn with_rng<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        layer_index: usize,
        init: &WeightInit,
        rng: &mut R,
    ) -> Result<Self, ScalarustError> {
        let neurons = (0..out_features)
            .map(|neuron_index| Neuron::with_rng(in_features, layer_index, neuron_index, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Linear {
            neurons,
            in_features,
            layer_index,
        })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }

    pub fn layer_index(&self) -> usize {
        self.layer_index
    }
}

impl Module for Linear {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarustError> {
        if inputs.len() != self.in_features {
            return Err(ScalarustError::InputSizeMismatch {
                expected: self.in_features,
                actual: inputs.len(),
            });
        }
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
