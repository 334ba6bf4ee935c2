//! Scalar reverse-mode automatic differentiation with a small neural-network
//! layer on top.
//!
//! Every computation builds a graph of [`Value`] nodes. Calling
//! [`Value::backward`] on a result fills in the gradient of that result with
//! respect to every node it depends on.
//!
//! ```
//! use microtorch_core::nn::{Activation, Layer, MSELoss, Module, NormalInit};
//! use microtorch_core::optim::{Optimizer, SgdOptimizer};
//! use microtorch_core::value::operand::scalars;
//! use microtorch_core::MicroTorchError;
//!
//! fn main() -> Result<(), MicroTorchError> {
//!     let mut rng = NormalInit::seeded(1);
//!     let layer = Layer::new(2, 1, Activation::Tanh, &mut rng)?;
//!     let mut sgd = SgdOptimizer::new(layer.parameters(), 0.05);
//!
//!     let pred = layer.forward(&scalars(&[0.5, -1.0]))?;
//!     let loss = MSELoss::default().calculate(&[0.25], &pred)?;
//!     sgd.zero_grad();
//!     loss.backward();
//!     sgd.step()?;
//!     assert!(loss.data() >= 0.0);
//!     Ok(())
//! }
//! ```

// Core graph types
pub mod value;
pub mod value_data;

pub mod autograd;
pub mod error;
pub mod ops;

// Networks and training
pub mod model;
pub mod nn;
pub mod optim;

pub mod utils;

pub use autograd::backward;
pub use error::MicroTorchError;
pub use model::Model;
pub use ops::activation::Activation;
pub use value::{Operand, Value};
pub use value_data::Op;

// Re-export traits required by public functions
pub use num_traits;
