//! The failure type as seen by callers.

use attest_tests::prelude::*;
use pretty_assertions::assert_eq;
use std::error::Error;

fn failing() -> ValidationError {
    validator()
        .assert_type_of(&Value::from("123"), "number", Some("Test validation error"))
        .unwrap_err()
}

#[test]
fn test_error_is_std_error() {
    let err: Box<dyn Error + Send + Sync> = Box::new(failing());

    assert!(ValidationError::is_validation_error(err.as_ref()));
    assert!(err.source().is_none());
}

#[test]
fn test_message_layout() {
    let err = failing();

    assert_eq!(
        err.to_string(),
        "Failed asserting 123 is type of number, got string\nTest validation error"
    );
    assert_eq!(err.description(), "Failed asserting 123 is type of number, got string");
    assert_eq!(err.context(), Some("Test validation error"));
}

#[test]
fn test_no_context_means_no_trailing_line() {
    let err = validator()
        .assert_has_property(&Value::Undefined, "foo", None)
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed asserting undefined has property foo");
}

#[test]
fn test_propagates_with_question_mark() {
    fn load(value: &Value) -> Result<(), Box<dyn Error>> {
        validator().assert(value).has_property("port").type_of("number", None)?;
        Ok(())
    }

    let ok = Value::Object(Object::new().with_property("port", 8080));
    let bad = Value::Object(Object::new().with_property("port", "8080"));

    assert!(load(&ok).is_ok());
    let err = load(&bad).unwrap_err();
    assert!(ValidationError::is_validation_error(err.as_ref()));
}
