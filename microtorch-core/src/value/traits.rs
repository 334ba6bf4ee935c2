use crate::value::Value;
use std::cmp::Ordering;

// Comparisons look at the forward value only. Use `Value::ptr_eq` for identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.data() == other.data()
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.data().partial_cmp(&other.data())
    }
}
