//! # Training a small regression network
//!
//! Fits `y = x0 * x1` on a handful of points with a 2-8-1 tanh network,
//! mean squared error and plain SGD.
//!
//! ## Execution
//! `cargo run --example train_regression`

use microtorch_core::nn::{Activation, Layer, MSELoss, Module, NormalInit, Reduction};
use microtorch_core::optim::{Optimizer, SgdOptimizer};
use microtorch_core::value::operand::scalars;
use microtorch_core::{MicroTorchError, Model};

const EPOCHS: usize = 200;
const LEARNING_RATE: f64 = 0.05;

fn main() -> Result<(), MicroTorchError> {
    let inputs: Vec<[f64; 2]> = vec![
        [-1.0, -1.0],
        [-1.0, 0.5],
        [-0.5, 1.0],
        [0.0, 0.0],
        [0.5, 0.5],
        [1.0, -0.5],
        [1.0, 1.0],
    ];
    let targets: Vec<f64> = inputs.iter().map(|x| x[0] * x[1]).collect();
    let samples: Vec<_> = inputs.iter().map(|x| scalars(x)).collect();

    let mut rng = NormalInit::seeded(2024);
    let mut model = Model::new();
    model.add_module("hidden", Box::new(Layer::new(2, 8, Activation::Tanh, &mut rng)?));
    model.add_module("out", Box::new(Layer::new(8, 1, Activation::Identity, &mut rng)?));
    println!("Model has {} parameters", model.num_parameters());

    let loss_fn = MSELoss::new(Reduction::Mean);
    let mut optimizer = SgdOptimizer::new(model.parameters(), LEARNING_RATE);

    for epoch in 0..EPOCHS {
        let predictions = model.predict(&samples)?;
        let loss = loss_fn.calculate(&targets, &predictions)?;

        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;

        if epoch % 20 == 0 || epoch == EPOCHS - 1 {
            println!("Epoch {:>3}: loss = {:.6}", epoch, loss.data());
        }
    }

    let predictions = model.predict(&samples)?;
    for ((x, t), p) in inputs.iter().zip(&targets).zip(&predictions) {
        println!("x = {:?}  target = {:+.3}  prediction = {:+.3}", x, t, p.data());
    }
    Ok(())
}
