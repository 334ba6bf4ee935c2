//! # Scalar Node Module (`value`)
//!
//! [`Value`] is the handle every graph operation consumes and produces. It is a
//! reference-counted pointer to a [`ValueData`] cell, so cloning a `Value` is
//! O(1) and several consumer nodes can share one operand (diamond graphs).
//!
//! ## Structure:
//!
//! - `create`: leaf constructors and the internal node constructor used by `ops`.
//! - `accessors`: reading data/grad/op, and the optimizer-facing mutators.
//! - `operand`: explicit promotion of raw numbers to leaf nodes.
//! - `autograd_methods`: `backward()` entry point.
//! - `debug` and `traits`: formatting and ordering.

use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

pub mod accessors;
pub mod autograd_methods;
pub mod create;
pub mod debug;
pub mod operand;
pub mod traits;

pub use operand::Operand;

/// A scalar node of the computation graph.
///
/// Nodes only reference their operands, never their consumers, so the graph
/// can be dropped by dropping the root handle.
#[derive(Clone)]
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Immutable borrow of the node state.
    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Mutable borrow of the node state.
    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
