use crate::error::ScalarustError;
use crate::nn::init::WeightInit;
use crate::nn::module::Module;
use crate::value::Value;
use log::trace;
use rand::Rng;

/// A single unit computing `tanh(bias + Σ wᵢ·xᵢ)`.
///
/// Weights and bias are labeled leaves: `L{layer}N{neuron}W{i}` and
/// `L{layer}N{neuron}B`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
}

impl Neuron {
    /// Creates a neuron with weights drawn uniformly from `[-1, 1]` and a zero bias.
    pub fn new(
        num_inputs: usize,
        layer_index: usize,
        neuron_index: usize,
    ) -> Result<Self, ScalarustError> {
        Self::with_rng(
            num_inputs,
            layer_index,
            neuron_index,
            &WeightInit::default(),
            &mut rand::thread_rng(),
        )
    }

    /// Same as [`Neuron::new`] with an explicit initialiser and random source.
    pub fn with_rng<R: Rng + ?Sized>(
        num_inputs: usize,
        layer_index: usize,
        neuron_index: usize,
        init: &WeightInit,
        rng: &mut R,
    ) -> Result<Self, ScalarustError> {
        let weights = init
            .sample_n(num_inputs, rng)?
            .into_iter()
            .enumerate()
            .map(|(i, w)| Value::with_label(w, format!("L{}N{}W{}", layer_index, neuron_index, i)))
            .collect();
        let bias = Value::with_label(0.0, format!("L{}N{}B", layer_index, neuron_index));
        Ok(Neuron { weights, bias })
    }

    /// Builds a neuron around existing parameter nodes.
    pub fn from_parameters(weights: Vec<Value>, bias: Value) -> Self {
        Neuron { weights, bias }
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn num_inputs(&self) -> usize {
        self.weights.len()
    }

    /// Computes the neuron's output node for `inputs`.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, ScalarustError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarustError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let mut act = self.bias.clone();
        for (w, x) in self.weights.iter().zip(inputs) {
            act = &act + &(w * x);
        }
        trace!("neuron {:?}: pre-activation {}", self.bias.label(), act.data());
        Ok(act.tanh())
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarustError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
