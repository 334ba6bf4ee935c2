use approx::assert_relative_eq;
use microtorch_core::autograd::grad_check::numerical_gradient;
use microtorch_core::nn::{
    Activation, ActivationLayer, Layer, MSELoss, MSELossL2, Module, Neuron, NormalInit, Reduction,
};
use microtorch_core::optim::{Optimizer, SgdOptimizer};
use microtorch_core::value::operand::scalars;
use microtorch_core::{MicroTorchError, Model, Value};

mod common;
use common::{fixed_tanh_layer, samples};

#[test]
fn test_single_layer_end_to_end() -> Result<(), MicroTorchError> {
    let model = Model::new().with_module("layer", Box::new(fixed_tanh_layer(vec![0.5, -0.5], 0.0)));
    let out = model.predict(&samples(&[&[1.0, 1.0]]))?;
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].data(), 0.0);

    let loss = MSELoss::default().calculate(&[1.0], &out)?;
    assert_eq!(loss.data(), 1.0);

    loss.backward();
    // [weight0, weight1, bias]
    let params = model.parameters();
    assert_eq!(params.len(), 3);
    // dL/dw_i = 2 (pred - 1) * (1 - tanh^2) * x_i = -2
    assert_relative_eq!(params[0].grad(), -2.0, epsilon = 1e-12);
    assert_relative_eq!(params[1].grad(), -2.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_neuron_width_mismatch() {
    let neuron = Neuron::from_parameters(vec![0.1, 0.2, 0.3], 0.0, Activation::Tanh);
    assert!(matches!(
        neuron.forward(&scalars(&[1.0, 2.0])),
        Err(MicroTorchError::ShapeMismatch { expected: 3, actual: 2, .. })
    ));
}

fn build_model(seed: u64) -> Result<Model, MicroTorchError> {
    let mut rng = NormalInit::seeded(seed);
    let mut model = Model::new();
    model.add_module("hidden", Box::new(Layer::new(2, 4, Activation::Tanh, &mut rng)?));
    model.add_module("out", Box::new(Layer::new(4, 1, Activation::Identity, &mut rng)?));
    Ok(model)
}

#[test]
fn test_training_reduces_loss() -> Result<(), MicroTorchError> {
    let model = build_model(3)?;
    let xs = samples(&[&[0.0, 0.0], &[0.0, 1.0], &[1.0, 0.0], &[1.0, 1.0]]);
    let ys = [0.0, 0.5, 0.5, 1.0];
    let mse = MSELoss::new(Reduction::Mean);
    let mut sgd = SgdOptimizer::new(model.parameters(), 0.05);

    let initial = mse.calculate(&ys, &model.predict(&xs)?)?.data();
    for _ in 0..100 {
        let loss = mse.calculate(&ys, &model.predict(&xs)?)?;
        sgd.zero_grad();
        loss.backward();
        sgd.step()?;
    }
    let fin = mse.calculate(&ys, &model.predict(&xs)?)?.data();
    assert!(fin < initial, "loss went from {} to {}", initial, fin);
    Ok(())
}

#[test]
fn test_model_gradients_match_finite_differences() -> Result<(), MicroTorchError> {
    let model = build_model(11)?;
    let params = model.parameters();
    let start: Vec<f64> = params.iter().map(Value::data).collect();
    let xs = samples(&[&[0.5, -1.0], &[-0.25, 0.75]]);
    let ys = [0.3, -0.2];
    let mse = MSELoss::default();

    // Writes the probe point into the model parameters and evaluates the loss.
    let loss_at = |point: &[Value]| -> Result<Value, MicroTorchError> {
        for (param, probe) in params.iter().zip(point) {
            param.set_data(probe.data());
        }
        mse.calculate(&ys, &model.predict(&xs)?)
    };
    let numerical = numerical_gradient(&loss_at, &start, 1e-6)
        .map_err(|e| MicroTorchError::UnsupportedOperation(e.to_string()))?;

    for (param, &x) in params.iter().zip(&start) {
        param.set_data(x);
    }
    model.zero_grad();
    mse.calculate(&ys, &model.predict(&xs)?)?.backward();

    assert_eq!(numerical.len(), params.len());
    for (param, n) in params.iter().zip(&numerical) {
        assert_relative_eq!(param.grad(), *n, epsilon = 1e-6, max_relative = 1e-5);
    }
    Ok(())
}

#[test]
fn test_activation_layer_in_model() -> Result<(), MicroTorchError> {
    let model = Model::new()
        .with_module("lin", Box::new(fixed_tanh_layer(vec![1.0, -1.0], 0.0)))
        .with_module("act", Box::new(ActivationLayer::new(Activation::Relu)));
    let out = model.predict(&samples(&[&[1.0, 2.0], &[2.0, 1.0]]))?;
    assert_eq!(out[0].data(), 0.0);
    assert!(out[1].data() > 0.0);
    Ok(())
}

#[test]
fn test_l2_penalty_shrinks_weights() -> Result<(), MicroTorchError> {
    let layer = fixed_tanh_layer(vec![2.0, -2.0], 0.0);
    let loss_fn = MSELossL2::new(0.5, Reduction::Mean);
    let pred = layer.forward(&scalars(&[0.0, 0.0]))?;
    let loss = loss_fn.calculate(&[0.0], &pred, || layer.parameters())?;
    // data term is zero; penalty = 0.5 * (4 + 4 + 0)
    assert_relative_eq!(loss.data(), 4.0, epsilon = 1e-12);

    let mut sgd = SgdOptimizer::new(layer.parameters(), 0.1);
    sgd.zero_grad();
    loss.backward();
    sgd.step()?;
    let w = layer.neurons()[0].weights();
    assert_relative_eq!(w[0].data(), 2.0 - 0.1 * 2.0, epsilon = 1e-12);
    assert_relative_eq!(w[1].data(), -2.0 + 0.1 * 2.0, epsilon = 1e-12);
    Ok(())
}
