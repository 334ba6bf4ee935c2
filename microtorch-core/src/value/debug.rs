use crate::value::Value;
use std::fmt;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => {
                write!(
                    f,
                    "Value(data={}, grad={}, op={:?}, operands={}",
                    guard.data,
                    guard.grad,
                    guard.op,
                    guard.operands.len()
                )?;
                if let Some(label) = &guard.label {
                    write!(f, ", label={:?}", label)?;
                }
                write!(f, ")")
            }
            Err(_) => write!(f, "Value(<mutably borrowed>)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.data())
    }
}
