use crate::autograd::graph::NodeId;
use crate::error::ScalarustError;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::param_group::ParamGroup;
use crate::value::Value;
use log::debug;
use std::collections::HashMap;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports momentum, weight decay, and Nesterov momentum. For every
/// parameter `p` with gradient `g`:
///
/// ```text
/// d   = g + weight_decay * p
/// buf = momentum * buf + d          (buf = d on the first step)
/// p  -= lr * (buf, or d + momentum * buf with nesterov, or d without momentum)
/// ```
#[derive(Debug)]
pub struct SgdOptimizer {
    param_groups: Vec<ParamGroup>,
    momentum: f32,
    nesterov: bool,
    momentum_buffers: HashMap<NodeId, f32>,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer` with a single parameter group.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameters to optimize, usually `module.parameters()`.
    /// * `lr`: The learning rate.
    /// * `momentum`: Momentum factor (0.0 disables it).
    /// * `weight_decay`: Weight decay (L2 penalty) factor for the default group.
    ///
    /// # Errors
    /// `InvalidHyperparameter` for a non-finite `lr` or `weight_decay`, or a
    /// negative or non-finite `momentum`.
    pub fn new(
        params: impl IntoIterator<Item = Value>,
        lr: f32,
        momentum: f32,
        weight_decay: f32,
    ) -> Result<Self, ScalarustError> {
        check_finite("lr", lr)?;
        check_finite("weight_decay", weight_decay)?;
        if !momentum.is_finite() || momentum < 0.0 {
            return Err(ScalarustError::InvalidHyperparameter {
                name: "momentum".to_string(),
                value: momentum,
            });
        }
        let default_param_group = ParamGroup::new(params.into_iter().collect(), lr, weight_decay);
        Ok(SgdOptimizer {
            param_groups: vec![default_param_group],
            momentum,
            nesterov: false,
            momentum_buffers: HashMap::new(),
        })
    }

    /// Enables or disables Nesterov momentum. Has no effect without momentum.
    pub fn with_nesterov(mut self, nesterov: bool) -> Self {
        self.nesterov = nesterov;
        self
    }

    pub fn momentum(&self) -> f32 {
        self.momentum
    }

    /// Current momentum buffer of `param`, if a step has created one.
    pub fn momentum_buffer(&self, param: &Value) -> Option<f32> {
        self.momentum_buffers.get(&param.node_id()).copied()
    }
}

fn check_finite(name: &str, value: f32) -> Result<(), ScalarustError> {
    if !value.is_finite() {
        return Err(ScalarustError::InvalidHyperparameter {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarustError> {
        for group in self.param_groups.iter() {
            // Groups added later bypass `new`, check them here.
            check_finite("lr", group.lr)?;
            check_finite("weight_decay", group.weight_decay)?;
        }

        let momentum = self.momentum;
        let mut updated = 0usize;
        for group in self.param_groups.iter() {
            let lr = group.lr;
            let weight_decay = group.weight_decay;

            for param in group.params.iter() {
                let mut d_p = param.grad();
                if weight_decay != 0.0 {
                    d_p += weight_decay * param.data();
                }

                let update = if momentum != 0.0 {
                    let buffer = self
                        .momentum_buffers
                        .entry(param.node_id())
                        .and_modify(|buf| *buf = momentum * *buf + d_p)
                        .or_insert(d_p);
                    if self.nesterov {
                        d_p + momentum * *buffer
                    } else {
                        *buffer
                    }
                } else {
                    d_p
                };

                param.set_data(param.data() - lr * update);
                updated += 1;
            }
        }
        debug!("SGD step: updated {} parameters", updated);
        Ok(())
    }

    fn zero_grad(&mut self) {
        for group in self.param_groups.iter() {
            for param in group.params.iter() {
                param.zero_grad();
            }
        }
    }

    fn add_param_group(&mut self, param_group: ParamGroup) {
        self.param_groups.push(param_group);
    }

    fn param_groups(&self) -> &[ParamGroup] {
        &self.param_groups
    }

    fn param_groups_mut(&mut self) -> &mut [ParamGroup] {
        &mut self.param_groups
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
