//! Integration tests for abacus-core, wired to the in-memory history adapter.

use abacus_adapters::InMemoryHistory;
use abacus_core::{
    application::ApplicationError,
    domain::{AngleUnit, DomainError},
    prelude::*,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn calculator() -> (Calculator, InMemoryHistory) {
    let history = InMemoryHistory::new();
    (Calculator::new(Box::new(history.clone())), history)
}

#[test]
fn test_reference_expressions() {
    let (calc, _) = calculator();

    assert_eq!(calc.evaluate("2 + 3").unwrap(), 5.0);
    assert_eq!(calc.evaluate("sqrt(16)").unwrap(), 4.0);
    assert_eq!(calc.evaluate("20% of 150").unwrap(), 30.0);
    assert_eq!(calc.evaluate("5!").unwrap(), 120.0);
    assert!(approx(calc.evaluate("sin(90)").unwrap(), 1.0));
    assert!(approx(calc.evaluate("log(100, 10)").unwrap(), 2.0));
    assert_eq!(calc.evaluate("2 ** 3").unwrap(), 8.0);
}

#[test]
fn test_history_length_tracks_successful_calls_in_order() {
    let (calc, history) = calculator();

    calc.add(1.0, 2.0).unwrap();
    calc.multiply(3.0, 4.0).unwrap();
    assert!(calc.divide(1.0, 0.0).is_err());
    calc.evaluate("sqrt(25)").unwrap();
    assert!(calc.evaluate("nonsense").is_err());
    calc.factorial(4.0).unwrap();

    let lines: Vec<String> = calc
        .history()
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(lines, vec!["1 + 2 = 3", "3 × 4 = 12", "√25 = 5", "4! = 24"]);
    assert_eq!(history.len().unwrap(), 4);

    let sequences: Vec<u64> = calc
        .history()
        .unwrap()
        .iter()
        .map(CalculationRecord::sequence)
        .collect();
    assert_eq!(sequences, vec![1, 2, 3, 4]);
}

#[test]
fn test_clear_resets_history() {
    let (calc, _) = calculator();
    calc.add(1.0, 1.0).unwrap();
    calc.add(2.0, 2.0).unwrap();

    calc.clear_history().unwrap();

    assert_eq!(calc.history_len().unwrap(), 0);
    assert_eq!(
        calc.last_result(),
        Err(CalcError::Application(ApplicationError::EmptyHistory))
    );

    calc.add(5.0, 5.0).unwrap();
    assert_eq!(calc.last_record().unwrap().sequence(), 1);
    assert_eq!(calc.last_result().unwrap(), 10.0);
}

#[test]
fn test_domain_errors_surface_through_evaluate() {
    let (calc, history) = calculator();

    assert_eq!(
        calc.evaluate("5 / 0"),
        Err(CalcError::Domain(DomainError::DivisionByZero))
    );
    assert!(matches!(
        calc.evaluate("sqrt(-4)"),
        Err(CalcError::Domain(DomainError::NegativeSquareRoot { .. }))
    ));
    assert!(matches!(
        calc.evaluate("log(10, 1)"),
        Err(CalcError::Domain(DomainError::InvalidLogarithmBase { .. }))
    ));
    assert!(matches!(
        calc.evaluate("2.5!"),
        Err(CalcError::Domain(DomainError::InvalidFactorial { .. }))
    ));
    assert_eq!(history.len().unwrap(), 0);
}

#[test]
fn test_error_categories() {
    let (calc, _) = calculator();

    assert_eq!(
        calc.evaluate("1 / 0").unwrap_err().category(),
        ErrorCategory::Domain
    );
    assert_eq!(
        calc.evaluate("5! + 2").unwrap_err().category(),
        ErrorCategory::Parse
    );
    assert_eq!(
        calc.last_result().unwrap_err().category(),
        ErrorCategory::EmptyState
    );
}

#[test]
fn test_radians_calculator() {
    let history = InMemoryHistory::new();
    let calc = Calculator::new(Box::new(history)).with_angle_unit(AngleUnit::Radians);

    let half_pi = std::f64::consts::FRAC_PI_2;
    assert!(approx(calc.sine(half_pi).unwrap(), 1.0));
    assert!(approx(calc.evaluate("cos(0)").unwrap(), 1.0));
    assert!(
        calc.last_record()
            .unwrap()
            .expression()
            .ends_with(" rad)")
    );
}

#[test]
fn test_separate_calculators_do_not_share_history() {
    let (a, _) = calculator();
    let (b, _) = calculator();

    a.add(1.0, 1.0).unwrap();

    assert_eq!(a.history_len().unwrap(), 1);
    assert_eq!(b.history_len().unwrap(), 0);
}
