use crate::value::Value;

/// Defines a group of parameters with specific optimizer hyperparameters.
///
/// This allows applying different settings (like learning rate or weight decay)
/// to different parts of a model.
#[derive(Clone, Debug)]
pub struct ParamGroup {
    /// The parameters included in this group. Handles share their node with
    /// the model, so updating them updates the model.
    pub params: Vec<Value>,
    pub lr: f32,
    pub weight_decay: f32,
}

impl ParamGroup {
    pub fn new(params: Vec<Value>, lr: f32, weight_decay: f32) -> Self {
        ParamGroup {
            params,
            lr,
            weight_decay,
        }
    }

    pub fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }

    pub fn lr(&self) -> f32 {
        self.lr
    }
}
