use algebra_attrs::ErrorKind;
use algebra_error::Error;

#[derive(Debug, ErrorKind)]
#[error(
    message = "unexpected end of input",
    labels = ["add an operand here"],
    help = "every operator needs an operand on both sides",
)]
struct MissingOperand;

#[derive(Debug, ErrorKind)]
#[error(
    message = format!("unknown function `{}`", name),
    labels = ["this function".to_string(), format!("called with {} here", argument)],
)]
struct UnknownFunction {
    name: String,
    argument: String,
}

/// Renders the error as plain text, without color codes.
fn render(err: &Error, input: &str) -> String {
    let report = err.report_to_string("input", input).unwrap();
    strip_ansi_escapes::strip_str(report)
}

#[test]
fn unit_error_kind() {
    let err = Error::new(vec![4..4], MissingOperand);
    let report = render(&err, "1 + ");

    assert!(report.contains("unexpected end of input"));
    assert!(report.contains("add an operand here"));
    assert!(report.contains("every operator needs an operand on both sides"));
}

#[test]
fn named_fields_in_scope() {
    let err = Error::new(
        vec![0..5, 6..7],
        UnknownFunction { name: "Gamma".to_string(), argument: "x".to_string() },
    );
    let report = render(&err, "Gamma[x]");

    assert!(report.contains("unknown function `Gamma`"));
    assert!(report.contains("this function"));
    assert!(report.contains("called with x here"));
}

#[test]
fn extra_labels_without_spans_are_dropped() {
    let err = Error::new(
        vec![0..1],
        UnknownFunction { name: "f".to_string(), argument: "y".to_string() },
    );
    let report = render(&err, "f[y]");

    assert!(report.contains("this function"));
    assert!(!report.contains("called with"));
}

#[derive(Debug, ErrorKind)]
#[error(message = "something went wrong")]
struct Bare;

#[test]
fn default_label_highlights_first_span() {
    let err = Error::new(vec![2..3, 4..5], Bare);
    let report = render(&err, "a + b");

    assert!(report.contains("something went wrong"));
    assert!(!report.contains("Help"));
}
