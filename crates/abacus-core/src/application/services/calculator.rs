//! Calculator facade.
//!
//! Composes the operation library with an injected [`HistoryLog`]:
//! 1. Evaluate the operation (pure, may fail with a domain error)
//! 2. On success, append exactly one [`CalculationRecord`]
//! 3. Return the numeric result
//!
//! Failed operations never touch the history.

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::HistoryLog},
    domain::{
        AngleUnit, BinaryOperator, CalculationRecord, Expression, TrigFunction, operations,
    },
    error::CalcResult,
};

/// The calculator.
///
/// Owns its history log; two calculators never share history unless they
/// are handed adapters that share storage.
pub struct Calculator {
    history: Box<dyn HistoryLog>,
    angle_unit: AngleUnit,
}

impl Calculator {
    /// Create a calculator that records into `history`.
    ///
    /// Trig operands are read as degrees until changed with
    /// [`with_angle_unit`](Self::with_angle_unit).
    ///
    /// # Example
    ///
    /// ```rust
    /// use abacus_adapters::InMemoryHistory;
    /// use abacus_core::application::Calculator;
    ///
    /// let calc = Calculator::new(Box::new(InMemoryHistory::new()));
    /// assert_eq!(calc.evaluate("2 + 3").unwrap(), 5.0);
    /// assert_eq!(calc.history_len().unwrap(), 1);
    /// ```
    pub fn new(history: Box<dyn HistoryLog>) -> Self {
        Self {
            history,
            angle_unit: AngleUnit::default(),
        }
    }

    pub fn with_angle_unit(mut self, unit: AngleUnit) -> Self {
        self.angle_unit = unit;
        self
    }

    pub fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    // -------------------------------------------------------------------------
    // Interpreter
    // -------------------------------------------------------------------------

    /// Parse `input` and evaluate it.
    ///
    /// Parse errors are returned before any computation is attempted.
    #[instrument(skip(self), level = "debug")]
    pub fn evaluate(&self, input: &str) -> CalcResult<f64> {
        let expression = Expression::parse(input)?;
        self.apply(&expression)
    }

    /// Evaluate an already-parsed expression and record it.
    pub fn apply(&self, expression: &Expression) -> CalcResult<f64> {
        let result = match expression {
            Expression::Binary { op, lhs, rhs } => {
                let (lhs, rhs) = (*lhs, *rhs);
                match op {
                    BinaryOperator::Add => operations::add(lhs, rhs),
                    BinaryOperator::Subtract => operations::subtract(lhs, rhs),
                    BinaryOperator::Multiply => operations::multiply(lhs, rhs),
                    BinaryOperator::Divide => operations::divide(lhs, rhs),
                    BinaryOperator::Power => operations::power(lhs, rhs),
                }
            }
            Expression::SquareRoot { value } => operations::square_root(*value),
            Expression::Percentage { percent, number } => {
                operations::percentage(*number, *percent)
            }
            Expression::Factorial { value } => operations::factorial(*value),
            Expression::Logarithm { value, base } => operations::logarithm(*value, *base),
            Expression::Trig { function, angle } => {
                operations::trig(*function, *angle, self.angle_unit)
            }
            Expression::Compound { text } => operations::compound(text),
        };

        let result = result.inspect_err(|e| {
            debug!(operation = expression.operation_name(), error = %e, "Operation rejected");
        })?;

        self.record(expression.describe(self.angle_unit), result)?;
        Ok(result)
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    pub fn add(&self, a: f64, b: f64) -> CalcResult<f64> {
        self.binary(BinaryOperator::Add, a, b)
    }

    pub fn subtract(&self, a: f64, b: f64) -> CalcResult<f64> {
        self.binary(BinaryOperator::Subtract, a, b)
    }

    pub fn multiply(&self, a: f64, b: f64) -> CalcResult<f64> {
        self.binary(BinaryOperator::Multiply, a, b)
    }

    pub fn divide(&self, a: f64, b: f64) -> CalcResult<f64> {
        self.binary(BinaryOperator::Divide, a, b)
    }

    pub fn power(&self, base: f64, exponent: f64) -> CalcResult<f64> {
        self.binary(BinaryOperator::Power, base, exponent)
    }

    pub fn square_root(&self, value: f64) -> CalcResult<f64> {
        self.apply(&Expression::SquareRoot { value })
    }

    /// `percent`% of `number`.
    pub fn percentage(&self, number: f64, percent: f64) -> CalcResult<f64> {
        self.apply(&Expression::Percentage { percent, number })
    }

    pub fn factorial(&self, n: f64) -> CalcResult<f64> {
        self.apply(&Expression::Factorial { value: n })
    }

    /// Logarithm of `value`; `None` for the natural logarithm.
    pub fn logarithm(&self, value: f64, base: Option<f64>) -> CalcResult<f64> {
        self.apply(&Expression::Logarithm { value, base })
    }

    pub fn sine(&self, angle: f64) -> CalcResult<f64> {
        self.trig(TrigFunction::Sin, angle)
    }

    pub fn cosine(&self, angle: f64) -> CalcResult<f64> {
        self.trig(TrigFunction::Cos, angle)
    }

    pub fn tangent(&self, angle: f64) -> CalcResult<f64> {
        self.trig(TrigFunction::Tan, angle)
    }

    // -------------------------------------------------------------------------
    // History
    // -------------------------------------------------------------------------

    /// Every record, oldest first.
    pub fn history(&self) -> CalcResult<Vec<CalculationRecord>> {
        self.history.records()
    }

    pub fn history_len(&self) -> CalcResult<usize> {
        self.history.len()
    }

    /// The most recent record. Fails with `EmptyHistory` when nothing has
    /// been calculated since creation or the last clear.
    pub fn last_record(&self) -> CalcResult<CalculationRecord> {
        self.history
            .last()?
            .ok_or_else(|| ApplicationError::EmptyHistory.into())
    }

    pub fn last_result(&self) -> CalcResult<f64> {
        self.last_record().map(|r| r.result())
    }

    pub fn clear_history(&self) -> CalcResult<()> {
        self.history.clear()?;
        debug!("History cleared");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn binary(&self, op: BinaryOperator, lhs: f64, rhs: f64) -> CalcResult<f64> {
        self.apply(&Expression::Binary { op, lhs, rhs })
    }

    fn trig(&self, function: TrigFunction, angle: f64) -> CalcResult<f64> {
        self.apply(&Expression::Trig { function, angle })
    }

    fn record(&self, expression: String, result: f64) -> CalcResult<()> {
        let sequence = self.history.next_sequence()?;
        let record = CalculationRecord::new(sequence, expression, result);
        debug!(sequence, record = %record, "Calculation recorded");
        self.history.append(record)
    }
}
