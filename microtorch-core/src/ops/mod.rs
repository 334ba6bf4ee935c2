//! # Scalar Operations Module (`ops`)
//!
//! Every operation that builds a graph node lives here.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a core function (`add_op`, `log_op`, ...)
//!   that computes the forward value and records the operand edges on a new node.
//!   Validation (division by zero, log domain) happens here, before any node exists.
//! - **Methods on `Value`:** thin wrappers over the `_op` functions, plus
//!   `*_scalar` variants that promote a raw number through `Operand::promote`.
//! - Gradient rules are not stored on the nodes; see `autograd::backward_op`.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, pow, neg.
//! - [`math_elem`]: exp, log.
//! - [`activation`]: relu, tanh, sigmoid and the [`Activation`](activation::Activation) table.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
