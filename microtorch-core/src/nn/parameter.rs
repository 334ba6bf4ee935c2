use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A leaf [`Value`] owned by a module and updated by an optimizer.
///
/// A parameter is always built from a raw number, never from an operation,
/// so its value can be rewritten between steps without invalidating any
/// node computed from it in a later forward pass.
#[derive(Clone)]
pub struct Parameter(Value);

impl Parameter {
    /// Creates a parameter holding `data` with a zero gradient.
    pub fn new(data: f64) -> Self {
        Parameter(Value::new(data))
    }

    /// Creates a labeled parameter.
    pub fn named(data: f64, name: &str) -> Self {
        Parameter(Value::labeled(data, name))
    }

    /// Returns a handle to the underlying leaf.
    pub fn value(&self) -> Value {
        self.0.clone()
    }

    /// Consumes the Parameter and returns the underlying leaf.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

// Allow reading data/grad of the underlying leaf via Deref.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0)
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
