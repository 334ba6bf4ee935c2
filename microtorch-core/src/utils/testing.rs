use crate::error::MicroTorchError;
use crate::nn::init::RandomSource;
use crate::value::Value;

/// Checks that the gradients of `actual` match `expected` within `tolerance`.
/// Panics with the offending index otherwise.
pub fn check_grads_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Gradient count mismatch");
    for (i, (v, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (v.grad() - e).abs();
        if diff > tolerance {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                v.grad(),
                e,
                diff,
                tolerance
            );
        }
    }
}

/// Checks that the forward values of `actual` match `expected` within `tolerance`.
pub fn check_data_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Value count mismatch");
    for (i, (v, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (v.data() - e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                v.data(),
                e,
                diff,
                tolerance
            );
        }
    }
}

/// Deterministic [`RandomSource`] replaying a fixed sequence, cycling when exhausted.
///
/// Ignores `mean` and `std`; useful for pinning initial parameters in tests.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        SequenceSource { values, cursor: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn generate(&mut self, count: usize, _mean: f64, _std: f64) -> Result<Vec<f64>, MicroTorchError> {
        if self.values.is_empty() {
            return Err(MicroTorchError::InvalidDistribution(
                "SequenceSource has no values".to_string(),
            ));
        }
        let out = (0..count)
            .map(|i| self.values[(self.cursor + i) % self.values.len()])
            .collect();
        self.cursor = (self.cursor + count) % self.values.len();
        Ok(out)
    }
}
