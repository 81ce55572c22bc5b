//! Expression grammar.
//!
//! An [`Expression`] is one operation plus its operands. Text is turned into
//! an `Expression` by [`Expression::parse`]; evaluation happens elsewhere
//! (see [`Calculator::apply`](crate::application::Calculator::apply)).
//!
//! # Grammar
//!
//! The whole input must match one of these forms, tried in order:
//!
//! | Form          | Example          |
//! |---------------|------------------|
//! | percentage    | `20% of 150`     |
//! | factorial     | `5!`             |
//! | function call | `log(100, 10)`   |
//! | binary        | `2 ** 8`, `7 / 2`|
//! | compound      | `2 + 3 * 4`      |
//!
//! Compound arithmetic (numbers, `+ - * / ^`, parentheses) is the fallback
//! and is evaluated with normal precedence. Mixing it with the other forms,
//! as in `5! + 2`, is rejected.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::{
    error::ParseError,
    operations::fasteval_syntax,
    value_objects::{AngleUnit, BinaryOperator, TrigFunction},
};

/// Optional sign, integer or decimal mantissa, optional exponent.
const NUMBER: &str = r"[-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:e[-+]?\d+)?";

/// [`NUMBER`] without the sign.
const UNSIGNED: &str = r"(?:\d+(?:\.\d*)?|\.\d+)(?:e[-+]?\d+)?";

lazy_static! {
    static ref NUMBER_ONLY: Regex = Regex::new(&format!(r"^{NUMBER}$")).unwrap();

    /// `X% of Y`
    static ref PERCENTAGE: Regex =
        Regex::new(&format!(r"^({NUMBER})\s*%\s*of\s+({NUMBER})$")).unwrap();

    /// `N!`
    static ref FACTORIAL: Regex = Regex::new(&format!(r"^({NUMBER})\s*!$")).unwrap();

    /// `name(args)`
    static ref CALL: Regex = Regex::new(r"^([a-z_][a-z0-9_]*)\s*\((.*)\)$").unwrap();

    /// `a OP b`; `**` listed first so it wins over `*`.
    static ref BINARY: Regex = Regex::new(&format!(
        r"^({NUMBER})\s*(\*\*|\^|[-+*/×÷x−])\s*({NUMBER})$"
    ))
    .unwrap();

    /// Arithmetic-only text: numbers, operators, parentheses.
    static ref COMPOUND: Regex = Regex::new(&format!(
        r"^(?:{UNSIGNED}|\*\*|[-+*/^()×÷−\s])+$"
    ))
    .unwrap();

    static ref UNSIGNED_NUMBER: Regex = Regex::new(UNSIGNED).unwrap();
}

/// A parsed calculator expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Binary {
        op: BinaryOperator,
        lhs: f64,
        rhs: f64,
    },
    SquareRoot {
        value: f64,
    },
    /// `percent`% of `number`.
    Percentage {
        percent: f64,
        number: f64,
    },
    Factorial {
        value: f64,
    },
    /// `base = None` is the natural logarithm.
    Logarithm {
        value: f64,
        base: Option<f64>,
    },
    Trig {
        function: TrigFunction,
        angle: f64,
    },
    /// Multi-operator arithmetic, kept as the (lower-cased) input text.
    Compound {
        text: String,
    },
}

impl Expression {
    /// Parse free-form input into an expression.
    ///
    /// Input is trimmed and lower-cased first, so `SQRT(16)` and `sqrt(16)`
    /// are the same expression.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let text = input.trim().to_lowercase();

        if text.is_empty() {
            return Err(ParseError::invalid(input));
        }

        if let Some(caps) = PERCENTAGE.captures(&text) {
            return Ok(Self::Percentage {
                percent: number(&caps[1], input)?,
                number: number(&caps[2], input)?,
            });
        }

        if let Some(caps) = FACTORIAL.captures(&text) {
            return Ok(Self::Factorial {
                value: number(&caps[1], input)?,
            });
        }

        if let Some(caps) = CALL.captures(&text) {
            let args = arguments(&caps[2], input)?;
            return call(&caps[1], &args);
        }

        if let Some(caps) = BINARY.captures(&text) {
            let op = BinaryOperator::from_token(&caps[2])
                .ok_or_else(|| ParseError::invalid(input))?;
            return Ok(Self::Binary {
                op,
                lhs: number(&caps[1], input)?,
                rhs: number(&caps[3], input)?,
            });
        }

        compound(&text, input)
    }

    /// Short operation name, used in log fields.
    pub fn operation_name(&self) -> &'static str {
        match self {
            Self::Binary { op, .. } => match op {
                BinaryOperator::Add => "add",
                BinaryOperator::Subtract => "subtract",
                BinaryOperator::Multiply => "multiply",
                BinaryOperator::Divide => "divide",
                BinaryOperator::Power => "power",
            },
            Self::SquareRoot { .. } => "square_root",
            Self::Percentage { .. } => "percentage",
            Self::Factorial { .. } => "factorial",
            Self::Logarithm { .. } => "logarithm",
            Self::Trig { function, .. } => function.as_str(),
            Self::Compound { .. } => "compound",
        }
    }

    /// Human-readable text for history records.
    ///
    /// Trig operands carry the unit they were evaluated in: `sin(90°)`.
    pub fn describe(&self, unit: AngleUnit) -> String {
        match self {
            Self::Binary { op, lhs, rhs } => format!("{lhs} {op} {rhs}"),
            Self::SquareRoot { value } => format!("√{value}"),
            Self::Percentage { percent, number } => format!("{percent}% of {number}"),
            Self::Factorial { value } => format!("{value}!"),
            Self::Logarithm { value, base: None } => format!("ln({value})"),
            Self::Logarithm {
                value,
                base: Some(base),
            } => format!("log_{base}({value})"),
            Self::Trig { function, angle } => format!("{function}({angle}{})", unit.suffix()),
            Self::Compound { text } => text.clone(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(AngleUnit::Degrees))
    }
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Out-of-range literals such as `1e400` are rejected rather than read as
/// infinity.
fn number(text: &str, input: &str) -> Result<f64, ParseError> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::invalid(input))
}

/// Fallback for arithmetic with more than one operator.
///
/// Needs at least two numbers, only arithmetic tokens, and text fasteval
/// can parse. Evaluation is left to [`operations::compound`](super::operations::compound).
fn compound(text: &str, input: &str) -> Result<Expression, ParseError> {
    let literals: Vec<&str> = UNSIGNED_NUMBER.find_iter(text).map(|m| m.as_str()).collect();
    if literals.len() < 2 || !COMPOUND.is_match(text) {
        return Err(ParseError::invalid(input));
    }
    for literal in literals {
        number(literal, input)?;
    }

    let mut slab = fasteval::Slab::new();
    fasteval::Parser::new()
        .parse(&fasteval_syntax(text), &mut slab.ps)
        .map_err(|_| ParseError::invalid(input))?;

    Ok(Expression::Compound {
        text: text.to_owned(),
    })
}

fn arguments(raw: &str, input: &str) -> Result<Vec<f64>, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    raw.split(',')
        .map(str::trim)
        .map(|arg| {
            if NUMBER_ONLY.is_match(arg) {
                number(arg, input)
            } else {
                Err(ParseError::invalid(input))
            }
        })
        .collect()
}

fn call(name: &str, args: &[f64]) -> Result<Expression, ParseError> {
    let arity = |expected: &'static str| ParseError::WrongArity {
        name: name.to_owned(),
        expected,
        found: args.len(),
    };

    match (name, args) {
        ("sqrt", [value]) => Ok(Expression::SquareRoot { value: *value }),
        ("sqrt", _) => Err(arity("1")),

        ("ln", [value]) | ("log", [value]) => Ok(Expression::Logarithm {
            value: *value,
            base: None,
        }),
        ("ln", _) => Err(arity("1")),

        ("log", [value, base]) => Ok(Expression::Logarithm {
            value: *value,
            base: Some(*base),
        }),
        ("log", _) => Err(arity("1 or 2")),

        ("sin" | "cos" | "tan", [angle]) => Ok(Expression::Trig {
            function: name.parse()?,
            angle: *angle,
        }),
        ("sin" | "cos" | "tan", _) => Err(arity("1")),

        (other, _) => Err(ParseError::UnknownFunction { name: other.into() }),
    }
}
