use super::*;
use crate::value_data::Op;
use approx::assert_relative_eq;

#[test]
fn test_div_forward_and_backward() -> Result<(), MicroTorchError> {
    // z = x / y, dz/dx = 1/y, dz/dy = -x/y^2
    let x = Value::new(2.0);
    let y = Value::new(4.0);
    let z = x.div(&y)?;
    assert_relative_eq!(z.data(), 0.5, epsilon = 1e-12);
    assert_eq!(z.op(), Op::Mul);

    z.backward();
    assert_relative_eq!(x.grad(), 0.25, epsilon = 1e-12);
    assert_relative_eq!(y.grad(), -2.0 / 16.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_scalar_divided_by_zero_node() -> Result<(), MicroTorchError> {
    let one = Operand::Scalar(1.0).promote("div")?;
    let zero = Value::new(0.0);
    assert!(matches!(
        one.div(&zero),
        Err(MicroTorchError::DivisionByZero { .. })
    ));
    Ok(())
}

#[test]
fn test_node_divided_by_zero_scalar() {
    let five = Value::new(5.0);
    match five.div_scalar(0.0) {
        Err(MicroTorchError::DivisionByZero { operation }) => assert_eq!(operation, "div"),
        other => panic!("Expected DivisionByZero, got {:?}", other),
    }
}

#[test]
fn test_div_by_node_that_evaluates_to_zero() {
    let a = Value::new(3.0);
    let b = Value::new(3.0);
    let diff = a.sub(&b);
    assert!(matches!(
        a.div(&diff),
        Err(MicroTorchError::DivisionByZero { .. })
    ));
}
