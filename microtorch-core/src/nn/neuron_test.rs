use super::*;
use crate::nn::init::NormalInit;
use crate::utils::testing::{check_grads_near, SequenceSource};
use crate::value::operand::scalars;
use crate::value_data::Op;
use approx::assert_relative_eq;

#[test]
fn test_neuron_new_draws_weights_then_bias() -> Result<(), MicroTorchError> {
    let mut rng = SequenceSource::new(vec![0.1, 0.2, 0.3, 0.4]);
    let neuron = Neuron::new(3, Activation::Tanh, &mut rng)?;
    assert_eq!(neuron.nin(), 3);
    let params: Vec<f64> = neuron.parameters().iter().map(Value::data).collect();
    assert_eq!(params, vec![0.1, 0.2, 0.3, 0.4]);
    assert!(neuron.parameters().iter().all(|p| p.is_leaf() && p.grad() == 0.0));
    Ok(())
}

#[test]
fn test_neuron_new_with_normal_init() -> Result<(), MicroTorchError> {
    let mut rng = NormalInit::seeded(11);
    let neuron = Neuron::new(4, Activation::Relu, &mut rng)?;
    assert_eq!(neuron.parameters().len(), 5);
    assert_eq!(neuron.activation(), Activation::Relu);
    Ok(())
}

#[test]
fn test_neuron_forward_identity() -> Result<(), MicroTorchError> {
    let neuron = Neuron::from_parameters(vec![2.0, -1.0, 0.5], 0.25, Activation::Identity);
    let out = neuron.forward(&scalars(&[1.0, 3.0, 4.0]))?;
    // 2 - 3 + 2 + 0.25
    assert_relative_eq!(out.data(), 1.25, epsilon = 1e-12);
    assert_eq!(out.op(), Op::Add);
    Ok(())
}

#[test]
fn test_neuron_forward_tanh_gradients() -> Result<(), MicroTorchError> {
    let neuron = Neuron::from_parameters(vec![0.3, -0.2], 0.1, Activation::Tanh);
    let x = [0.5, 2.0];
    let out = neuron.forward(&scalars(&x))?;
    let z: f64 = 0.3 * 0.5 - 0.2 * 2.0 + 0.1;
    assert_relative_eq!(out.data(), z.tanh(), epsilon = 1e-12);

    out.backward();
    let dz = 1.0 - z.tanh().powi(2);
    check_grads_near(&neuron.parameters(), &[dz * x[0], dz * x[1], dz], 1e-12);
    Ok(())
}

#[test]
fn test_neuron_accepts_node_inputs() -> Result<(), MicroTorchError> {
    let neuron = Neuron::from_parameters(vec![1.5], 0.0, Activation::Sigmoid);
    let x = Value::new(2.0);
    let out = neuron.forward(&[Operand::from(&x)])?;
    out.backward();
    let s = out.data();
    assert_relative_eq!(x.grad(), s * (1.0 - s) * 1.5, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_neuron_shape_mismatch() {
    let neuron = Neuron::from_parameters(vec![0.1, 0.2, 0.3], 0.0, Activation::Tanh);
    match neuron.forward(&scalars(&[1.0, 2.0])) {
        Err(MicroTorchError::ShapeMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("Expected ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_neuron_rejects_non_finite_input() {
    let neuron = Neuron::from_parameters(vec![0.1], 0.0, Activation::Tanh);
    assert!(matches!(
        neuron.forward(&[Operand::Scalar(f64::NAN)]),
        Err(MicroTorchError::UnsupportedOperand { .. })
    ));
}

#[test]
fn test_neuron_named_parameters() {
    let neuron = Neuron::from_parameters(vec![0.0, 0.0], 0.0, Activation::Relu);
    let names: Vec<String> = neuron.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["weight0", "weight1", "bias"]);
}

#[test]
fn test_neuron_without_inputs_is_bias() -> Result<(), MicroTorchError> {
    let neuron = Neuron::from_parameters(Vec::new(), 0.5, Activation::Identity);
    let out = neuron.forward(&[])?;
    assert!(out.ptr_eq(neuron.bias()));
    Ok(())
}
