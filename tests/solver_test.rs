use edusolve::solver::{prepare, SolveRequest};

#[test]
fn test_plain_expression() {
    assert_eq!(
        prepare("  2*x + 3 "),
        Ok(SolveRequest::Expression {
            expression: "2*x + 3".to_string()
        })
    );
}

#[test]
fn test_equation_splits_on_first_equals() {
    assert_eq!(
        prepare("x^2 - 1 = 0"),
        Ok(SolveRequest::Equation {
            lhs: "x^2 - 1".to_string(),
            rhs: "0".to_string()
        })
    );
}

#[test]
fn test_second_equals_stays_on_rhs() {
    // The evaluator owns rejecting this; pre-processing only splits once.
    assert_eq!(
        prepare("x = y = z"),
        Ok(SolveRequest::Equation {
            lhs: "x".to_string(),
            rhs: "y = z".to_string()
        })
    );
}

#[test]
fn test_empty_input_is_an_error_message() {
    let err = prepare("   ").unwrap_err();
    assert!(err.starts_with("Error:"), "got: {err}");
}

#[test]
fn test_equation_with_empty_side_is_an_error_message() {
    assert!(prepare("x + 1 =").is_err());
    assert!(prepare("= 3").is_err());
}
