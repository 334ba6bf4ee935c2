use microtorch_core::nn::{Activation, Layer, Neuron};
use microtorch_core::value::operand::scalars;
use microtorch_core::{Operand, Value};

// Shared by several test crates; not every crate uses every helper.
#[allow(dead_code)]
pub fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().copied().map(Value::new).collect()
}

#[allow(dead_code)]
pub fn samples(rows: &[&[f64]]) -> Vec<Vec<Operand>> {
    rows.iter().map(|r| scalars(r)).collect()
}

/// Single tanh neuron with fixed weights, wrapped as a layer.
#[allow(dead_code)]
pub fn fixed_tanh_layer(weights: Vec<f64>, bias: f64) -> Layer {
    Layer::from_neurons(vec![Neuron::from_parameters(weights, bias, Activation::Tanh)])
        .expect("single neuron layer")
}
