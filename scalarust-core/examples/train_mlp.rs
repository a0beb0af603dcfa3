//! Trains a 3 -> [4, 4, 1] network on four samples with MSE and SGD.

use scalarust_core::nn::{Mlp, Module, MSELoss};
use scalarust_core::optim::{Optimizer, SgdOptimizer};
use scalarust_core::{ScalarustError, Value};

fn values(data: &[f32]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}

fn main() -> Result<(), ScalarustError> {
    env_logger::init();

    let mlp = Mlp::new(3, &[4, 4, 1])?;
    println!("network with {} parameters", mlp.num_parameters());

    let inputs = vec![
        values(&[2.0, 3.0, -1.0]),
        values(&[3.0, -1.0, 0.5]),
        values(&[0.5, 1.0, 1.0]),
        values(&[1.0, 1.0, -1.0]),
    ];
    let targets = values(&[1.0, -1.0, -1.0, 1.0]);

    let loss_fn = MSELoss::new();
    let mut optimizer = SgdOptimizer::new(mlp.parameters(), 0.05, 0.0, 0.0)?;

    for epoch in 0..200 {
        let predictions: Vec<Value> = mlp
            .forward_batch(&inputs)?
            .into_iter()
            .map(|out| out[0].clone())
            .collect();
        let loss = loss_fn.calculate(&predictions, &targets)?;

        optimizer.zero_grad();
        loss.backward()?;
        optimizer.step()?;

        if epoch % 20 == 0 {
            println!("epoch {:>3}: loss = {:.6}", epoch, loss.data());
        }
    }

    for (sample, target) in inputs.iter().zip(&targets) {
        let prediction = mlp.forward(sample)?;
        println!("target {:>5.2}  prediction {:>8.5}", target.data(), prediction[0].data());
    }
    Ok(())
}
