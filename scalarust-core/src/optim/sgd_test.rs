use super::*;
use crate::nn::{Mlp, Module, MSELoss};
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Helper to create a parameter with a gradient already accumulated.
fn create_param(data: f32, grad: f32) -> Value {
    let param = Value::new(data);
    param.set_grad(grad);
    param
}

#[test]
fn test_sgd_basic_step() -> Result<(), ScalarustError> {
    let params = vec![create_param(1.0, 0.1), create_param(-2.0, 0.4)];
    let mut optimizer = SgdOptimizer::new(params.clone(), 0.1, 0.0, 0.0)?;
    optimizer.step()?;
    assert_relative_eq!(params[0].data(), 1.0 - 0.1 * 0.1, epsilon = 1e-6);
    assert_relative_eq!(params[1].data(), -2.0 - 0.1 * 0.4, epsilon = 1e-6);
    // Gradients are left untouched by the step.
    assert_eq!(params[0].grad(), 0.1);
    assert!(optimizer.momentum_buffer(&params[0]).is_none());
    Ok(())
}

#[test]
fn test_sgd_weight_decay() -> Result<(), ScalarustError> {
    let param = create_param(2.0, 0.5);
    let mut optimizer = SgdOptimizer::new(vec![param.clone()], 0.1, 0.0, 0.01)?;
    optimizer.step()?;
    // d = 0.5 + 0.01 * 2.0
    assert_relative_eq!(param.data(), 2.0 - 0.1 * 0.52, epsilon = 1e-6);
    Ok(())
}

#[test]
fn test_sgd_momentum() -> Result<(), ScalarustError> {
    let param = create_param(1.0, 1.0);
    let mut optimizer = SgdOptimizer::new(vec![param.clone()], 0.1, 0.9, 0.0)?;

    optimizer.step()?;
    assert_eq!(optimizer.momentum_buffer(&param), Some(1.0));
    assert_relative_eq!(param.data(), 0.9, epsilon = 1e-6);

    optimizer.step()?;
    // buf = 0.9 * 1.0 + 1.0
    assert_relative_eq!(optimizer.momentum_buffer(&param).unwrap_or(0.0), 1.9, epsilon = 1e-6);
    assert_relative_eq!(param.data(), 0.9 - 0.19, epsilon = 1e-6);
    Ok(())
}

#[test]
fn test_sgd_nesterov() -> Result<(), ScalarustError> {
    let param = create_param(1.0, 1.0);
    let mut optimizer = SgdOptimizer::new(vec![param.clone()], 0.1, 0.5, 0.0)?.with_nesterov(true);
    optimizer.step()?;
    // buf = 1.0, update = 1.0 + 0.5 * 1.0
    assert_relative_eq!(param.data(), 1.0 - 0.15, epsilon = 1e-6);
    Ok(())
}

#[test]
fn test_sgd_zero_grad() -> Result<(), ScalarustError> {
    let params = vec![create_param(1.0, 3.0), create_param(2.0, -1.0)];
    let mut optimizer = SgdOptimizer::new(params.clone(), 0.1, 0.0, 0.0)?;
    optimizer.zero_grad();
    assert!(params.iter().all(|p| p.grad() == 0.0));
    Ok(())
}

#[test]
fn test_sgd_param_groups() -> Result<(), ScalarustError> {
    let fast = create_param(1.0, 1.0);
    let slow = create_param(1.0, 1.0);
    let mut optimizer = SgdOptimizer::new(vec![fast.clone()], 0.5, 0.0, 0.0)?;
    optimizer.add_param_group(ParamGroup::new(vec![slow.clone()], 0.01, 0.0));
    assert_eq!(optimizer.param_groups().len(), 2);

    optimizer.step()?;
    assert_relative_eq!(fast.data(), 0.5, epsilon = 1e-6);
    assert_relative_eq!(slow.data(), 0.99, epsilon = 1e-6);

    optimizer.param_groups_mut()[1].set_lr(0.0);
    optimizer.step()?;
    assert_relative_eq!(slow.data(), 0.99, epsilon = 1e-6);
    assert_eq!(optimizer.param_groups()[1].lr(), 0.0);
    Ok(())
}

#[test]
fn test_sgd_invalid_hyperparameters() {
    let result = SgdOptimizer::new(vec![Value::new(1.0)], f32::NAN, 0.0, 0.0);
    assert!(matches!(
        result,
        Err(ScalarustError::InvalidHyperparameter { ref name, .. }) if name == "lr"
    ));
    let result = SgdOptimizer::new(vec![Value::new(1.0)], 0.1, -0.5, 0.0);
    assert!(matches!(
        result,
        Err(ScalarustError::InvalidHyperparameter { ref name, .. }) if name == "momentum"
    ));
}

#[test]
fn test_sgd_rejects_bad_added_group() -> Result<(), ScalarustError> {
    let param = create_param(1.0, 1.0);
    let mut optimizer = SgdOptimizer::new(vec![param.clone()], 0.1, 0.0, 0.0)?;
    optimizer.add_param_group(ParamGroup::new(vec![], f32::INFINITY, 0.0));
    assert!(optimizer.step().is_err());
    // Nothing was updated.
    assert_eq!(param.data(), 1.0);
    Ok(())
}

#[test]
fn test_sgd_reduces_mlp_loss() -> Result<(), ScalarustError> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = StdRng::seed_from_u64(5);
    let mlp = Mlp::with_rng(2, &[3, 1], &Default::default(), &mut rng)?;
    let inputs = vec![
        vec![Value::new(1.0), Value::new(-1.0)],
        vec![Value::new(-0.5), Value::new(0.5)],
    ];
    let targets = vec![Value::new(0.8), Value::new(-0.8)];
    let mut optimizer = SgdOptimizer::new(mlp.parameters(), 0.1, 0.0, 0.0)?;
    let loss_fn = MSELoss::new();

    let mut losses = Vec::new();
    for _ in 0..30 {
        let predictions: Vec<Value> = mlp
            .forward_batch(&inputs)?
            .into_iter()
            .map(|out| out[0].clone())
            .collect();
        let loss = loss_fn.calculate(&predictions, &targets)?;
        optimizer.zero_grad();
        loss.backward()?;
        optimizer.step()?;
        losses.push(loss.data());
    }
    assert!(
        losses[losses.len() - 1] < losses[0],
        "loss did not decrease: {:?}",
        losses
    );
    Ok(())
}
