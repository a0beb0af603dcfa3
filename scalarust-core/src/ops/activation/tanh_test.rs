use super::*;
use crate::autograd::grad_check::check_grad;
use approx::{assert_abs_diff_eq, assert_relative_eq};

#[test]
fn test_tanh_scalar_matches_std() {
    for x in [-3.0f32, -0.5, 0.0, 0.25, 0.88137358, 2.0] {
        assert_abs_diff_eq!(tanh_scalar(x), x.tanh(), epsilon = 1e-6);
    }
}

#[test]
fn test_tanh_saturates_without_nan() {
    assert_eq!(tanh_scalar(100.0), 1.0);
    assert_eq!(tanh_scalar(-100.0), -1.0);
}

#[test]
fn test_tanh_forward_is_single_node() -> Result<(), ScalarustError> {
    let x = Value::new(0.88137358);
    let out = tanh_op(&x)?;
    assert_abs_diff_eq!(out.data(), 0.7071, epsilon = 1e-3);
    assert_eq!(out.operation(), Some(Operation::Tanh));
    // Fused: the only dependency is the input leaf itself.
    assert_eq!(out.dependencies(), vec![x]);
    Ok(())
}

#[test]
fn test_tanh_backward() -> Result<(), ScalarustError> {
    let x = Value::new(0.3);
    let out = tanh_op(&x)?;
    out.set_grad(1.0);
    Operation::Tanh.backward(&[x.clone()], &out)?;
    let t = 0.3f32.tanh();
    assert_relative_eq!(x.grad(), 1.0 - t * t, epsilon = 1e-6);
    Ok(())
}

#[test]
fn test_tanh_grad_check() {
    let inputs = vec![Value::new(0.6)];
    let func = |xs: &[Value]| tanh_op(&xs[0]);
    check_grad(func, &inputs, 1e-2, 1e-2).expect("Tanh gradient check failed");
}
