//! Domain value objects: AngleUnit, TrigFunction, BinaryOperator.
//!
//! Pure value types. `Copy`, equality-by-value, with string forms and
//! `FromStr` parsers so the CLI and config layers can round-trip them.

use crate::domain::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── AngleUnit ────────────────────────────────────────────────────────────────

/// How trigonometric operands are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Degrees => "degrees",
            Self::Radians => "radians",
        }
    }

    /// Convert an angle in this unit to radians.
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle.to_radians(),
            Self::Radians => angle,
        }
    }

    /// Suffix used when rendering an angle operand: `90°` or `1.5 rad`.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Degrees => "°",
            Self::Radians => " rad",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AngleUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "degrees" | "degree" | "deg" => Ok(Self::Degrees),
            "radians" | "radian" | "rad" => Ok(Self::Radians),
            other => Err(format!("unknown angle unit: {other}")),
        }
    }
}

// ── TrigFunction ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrigFunction {
    Sin,
    Cos,
    Tan,
}

impl TrigFunction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }

    /// Evaluate on an angle already expressed in radians.
    pub fn apply(self, radians: f64) -> f64 {
        match self {
            Self::Sin => radians.sin(),
            Self::Cos => radians.cos(),
            Self::Tan => radians.tan(),
        }
    }
}

impl fmt::Display for TrigFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrigFunction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sin" => Ok(Self::Sin),
            "cos" => Ok(Self::Cos),
            "tan" => Ok(Self::Tan),
            other => Err(ParseError::UnknownFunction { name: other.into() }),
        }
    }
}

// ── BinaryOperator ───────────────────────────────────────────────────────────

/// Infix operators of the `a OP b` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOperator {
    /// Symbol used in history records.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    /// Parse an input token. Both ASCII and typographic forms are accepted.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "*" | "×" | "x" => Some(Self::Multiply),
            "/" | "÷" => Some(Self::Divide),
            "**" | "^" => Some(Self::Power),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
