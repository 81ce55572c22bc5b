//! The operation library.
//!
//! Pure functions over `f64`. Each validates its mathematical precondition
//! and returns a [`DomainError`] instead of producing NaN or a silent
//! infinity. Nothing here records history; see
//! [`Calculator`](crate::application::Calculator) for that.

use std::collections::BTreeMap;

use crate::domain::{
    error::DomainError,
    value_objects::{AngleUnit, TrigFunction},
};

/// Largest `n` whose factorial fits in an `f64`.
pub const MAX_FACTORIAL: u32 = 170;

pub fn add(a: f64, b: f64) -> Result<f64, DomainError> {
    checked("addition", &[a, b], a + b)
}

pub fn subtract(a: f64, b: f64) -> Result<f64, DomainError> {
    checked("subtraction", &[a, b], a - b)
}

pub fn multiply(a: f64, b: f64) -> Result<f64, DomainError> {
    checked("multiplication", &[a, b], a * b)
}

pub fn divide(a: f64, b: f64) -> Result<f64, DomainError> {
    if b == 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    checked("division", &[a, b], a / b)
}

/// `base` raised to `exponent`.
///
/// Finite operands that produce NaN (negative base, fractional exponent) or
/// an infinity are rejected. Zero to a negative power is a division by zero.
pub fn power(base: f64, exponent: f64) -> Result<f64, DomainError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    checked("power", &[base, exponent], base.powf(exponent))
}

/// Evaluate compound arithmetic such as `2 + 3 * 4` or `(1 + 2) ^ 3`.
///
/// Any non-finite result (a zero divisor somewhere inside, an overflow) is
/// rejected as undefined.
pub fn compound(text: &str) -> Result<f64, DomainError> {
    let undefined = DomainError::UndefinedResult {
        operation: "expression",
    };

    let mut namespace = BTreeMap::<String, f64>::new();
    let value = fasteval::ez_eval(&fasteval_syntax(text), &mut namespace).map_err(|_| undefined.clone())?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(undefined)
    }
}

/// Rewrite calculator operators into the syntax fasteval understands.
pub(crate) fn fasteval_syntax(text: &str) -> String {
    text.replace("**", "^")
        .replace('×', "*")
        .replace('÷', "/")
        .replace('−', "-")
}

/// NaN or an infinity from finite operands is an error; non-finite
/// operands pass through unchanged.
fn checked(operation: &'static str, operands: &[f64], result: f64) -> Result<f64, DomainError> {
    if operands.iter().any(|x| !x.is_finite()) {
        return Ok(result);
    }
    if result.is_nan() {
        return Err(DomainError::UndefinedResult { operation });
    }
    if result.is_infinite() {
        return Err(DomainError::Overflow { operation });
    }
    Ok(result)
}

pub fn square_root(value: f64) -> Result<f64, DomainError> {
    if value < 0.0 {
        return Err(DomainError::NegativeSquareRoot { value });
    }
    Ok(value.sqrt())
}

/// `percent`% of `number`.
pub fn percentage(number: f64, percent: f64) -> Result<f64, DomainError> {
    Ok(number * percent / 100.0)
}

/// `n!` for whole numbers `0 <= n <= 170`.
pub fn factorial(n: f64) -> Result<f64, DomainError> {
    if n < 0.0 || n.fract() != 0.0 || !n.is_finite() {
        return Err(DomainError::InvalidFactorial { value: n });
    }
    if n > f64::from(MAX_FACTORIAL) {
        return Err(DomainError::Overflow {
            operation: "factorial",
        });
    }

    // n is a whole number in 0..=170 here.
    let n = n as u32;
    Ok((2..=n).fold(1.0, |acc, k| acc * f64::from(k)))
}

/// Logarithm of `value`; `base = None` means the natural logarithm.
pub fn logarithm(value: f64, base: Option<f64>) -> Result<f64, DomainError> {
    if value <= 0.0 {
        return Err(DomainError::NonPositiveLogarithm { value });
    }
    match base {
        None => Ok(value.ln()),
        Some(base) if base <= 0.0 || base == 1.0 => {
            Err(DomainError::InvalidLogarithmBase { base })
        }
        Some(base) => Ok(value.ln() / base.ln()),
    }
}

pub fn trig(function: TrigFunction, angle: f64, unit: AngleUnit) -> Result<f64, DomainError> {
    Ok(function.apply(unit.to_radians(angle)))
}

pub fn sine(angle: f64, unit: AngleUnit) -> Result<f64, DomainError> {
    trig(TrigFunction::Sin, angle, unit)
}

pub fn cosine(angle: f64, unit: AngleUnit) -> Result<f64, DomainError> {
    trig(TrigFunction::Cos, angle, unit)
}

pub fn tangent(angle: f64, unit: AngleUnit) -> Result<f64, DomainError> {
    trig(TrigFunction::Tan, angle, unit)
}
