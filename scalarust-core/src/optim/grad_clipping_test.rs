use super::*;
use approx::assert_relative_eq;

fn params_with_grads(grads: &[f32]) -> Vec<Value> {
    grads
        .iter()
        .map(|&g| {
            let p = Value::new(0.0);
            p.set_grad(g);
            p
        })
        .collect()
}

#[test]
fn test_clip_grad_value() -> Result<(), ScalarustError> {
    let params = params_with_grads(&[-5.0, 2.0, 0.3, -0.5]);
    clip_grad_value(&params, 1.0)?;
    let grads: Vec<f32> = params.iter().map(Value::grad).collect();
    assert_eq!(grads, vec![-1.0, 1.0, 0.3, -0.5]);
    Ok(())
}

#[test]
fn test_clip_grad_value_negative() {
    let params = params_with_grads(&[1.0]);
    assert!(clip_grad_value(&params, -1.0).is_err());
}

#[test]
fn test_clip_grad_norm_scales_down() -> Result<(), ScalarustError> {
    let params = params_with_grads(&[3.0, 4.0]);
    let norm = clip_grad_norm(&params, 1.0)?;
    assert_relative_eq!(norm, 5.0, epsilon = 1e-6);
    assert_relative_eq!(params[0].grad(), 0.6, epsilon = 1e-6);
    assert_relative_eq!(params[1].grad(), 0.8, epsilon = 1e-6);
    Ok(())
}

#[test]
fn test_clip_grad_norm_below_threshold() -> Result<(), ScalarustError> {
    let params = params_with_grads(&[0.3, -0.4]);
    let norm = clip_grad_norm(&params, 1.0)?;
    assert_relative_eq!(norm, 0.5, epsilon = 1e-6);
    assert_eq!(params[0].grad(), 0.3);
    assert_eq!(params[1].grad(), -0.4);
    Ok(())
}

#[test]
fn test_clip_grad_norm_invalid_max_norm() {
    let params = params_with_grads(&[1.0]);
    for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        assert!(matches!(
            clip_grad_norm(&params, bad),
            Err(ScalarustError::InvalidHyperparameter { .. })
        ));
    }
    assert_eq!(params[0].grad(), 1.0);
}

#[test]
fn test_clip_grad_norm_empty() -> Result<(), ScalarustError> {
    assert_eq!(clip_grad_norm(&[], 1.0)?, 0.0);
    Ok(())
}
