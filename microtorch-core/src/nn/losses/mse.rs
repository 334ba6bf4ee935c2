use crate::error::MicroTorchError;
use crate::value::{Operand, Value};
use std::str::FromStr;

/// Specifies the reduction to apply to the summed squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = MicroTorchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(MicroTorchError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Computes the Mean Squared Error (MSE) loss between targets and predictions.
///
/// The loss is built from graph operations, so calling `backward()` on the
/// result reaches every node the predictions depend on.
#[derive(Debug, Default, Clone)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds `Σ (true − pred)²`, divided by the count for `Mean`.
    ///
    /// # Errors
    /// * `ShapeMismatch` if the two sequences differ in length.
    /// * `DivisionByZero` for an empty batch under `Mean`.
    /// * `UnsupportedOperand` if a target is not finite.
    pub fn calculate(&self, y_true: &[f64], y_pred: &[Value]) -> Result<Value, MicroTorchError> {
        if y_true.len() != y_pred.len() {
            return Err(MicroTorchError::ShapeMismatch {
                expected: y_true.len(),
                actual: y_pred.len(),
                operation: "MSELoss calculate".to_string(),
            });
        }

        let mut total: Option<Value> = None;
        for (&t, p) in y_true.iter().zip(y_pred) {
            let target = Operand::Scalar(t).promote("MSELoss calculate")?;
            let squared = target.sub(p).pow(2.0)?;
            total = Some(match total {
                Some(acc) => acc.add(&squared),
                None => squared,
            });
        }

        match (self.reduction, total) {
            (Reduction::Mean, None) => Err(MicroTorchError::DivisionByZero {
                operation: "MSELoss mean over empty batch".to_string(),
            }),
            (Reduction::Sum, None) => Ok(Value::new(0.0)),
            (Reduction::Mean, Some(sum)) => sum.div_scalar(y_true.len() as f64),
            (Reduction::Sum, Some(sum)) => Ok(sum),
        }
    }
}

/// MSE plus an L2 penalty `alpha · Σ p²` over the model parameters.
#[derive(Debug, Clone)]
pub struct MSELossL2 {
    mse: MSELoss,
    alpha: f64,
}

impl MSELossL2 {
    pub fn new(alpha: f64, reduction: Reduction) -> Self {
        MSELossL2 {
            mse: MSELoss::new(reduction),
            alpha,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// `parameters` is called once per evaluation, typically
    /// `|| model.parameters()`.
    pub fn calculate<F>(
        &self,
        y_true: &[f64],
        y_pred: &[Value],
        parameters: F,
    ) -> Result<Value, MicroTorchError>
    where
        F: Fn() -> Vec<Value>,
    {
        let data_loss = self.mse.calculate(y_true, y_pred)?;
        let params = parameters();
        if params.is_empty() {
            return Ok(data_loss);
        }
        let mut penalty: Option<Value> = None;
        for p in &params {
            let squared = p.pow(2.0)?;
            penalty = Some(match penalty {
                Some(acc) => acc.add(&squared),
                None => squared,
            });
        }
        match penalty {
            Some(penalty) => Ok(data_loss.add(&penalty.mul_scalar(self.alpha)?)),
            None => Ok(data_loss),
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
