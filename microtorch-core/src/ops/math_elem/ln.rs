use crate::error::MicroTorchError;
use crate::value::Value;
use crate::value_data::Op;

/// Builds the natural logarithm of `a`. Local gradient: `1 / a`.
///
/// # Errors
/// `DomainError` if `a` is not strictly positive.
pub fn log_op(a: &Value) -> Result<Value, MicroTorchError> {
    let x = a.data();
    if x.is_nan() || x <= 0.0 {
        return Err(MicroTorchError::DomainError {
            operation: "log".to_string(),
            value: x,
        });
    }
    Ok(Value::from_op(x.ln(), Op::Log, vec![a.clone()]))
}

impl Value {
    pub fn log(&self) -> Result<Value, MicroTorchError> {
        log_op(self)
    }
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
