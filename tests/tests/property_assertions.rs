//! Own-property existence and property type assertions.

use attest_tests::prelude::*;

fn holding(value: impl Into<Value>) -> Value {
    Value::Object(Object::new().with_property("foo", value))
}

#[test]
fn test_passes_when_property_is_owned() {
    let v = validator();

    for (case, obj) in [
        ("{foo: 'bar'}", holding("bar")),
        (
            "function with foo",
            Function::anonymous().with_property("foo", "bar").into(),
        ),
        ("{foo: undefined}", holding(Value::Undefined)),
    ] {
        expect_passes(
            v.assert_has_property(&obj, "foo", Some("Test validation error")),
            case,
        );
    }
}

#[test]
fn test_fails_when_property_is_not_owned() {
    let v = validator();

    for (case, obj) in [
        ("{}", Value::Object(Object::new())),
        ("function() {}", Function::anonymous().into()),
        ("[]", Value::Array(vec![])),
        ("false", false.into()),
        ("123", 123.into()),
        ("'123'", "123".into()),
        ("null", Value::Null),
        ("undefined", Value::Undefined),
    ] {
        let err = expect_fails(
            v.assert_has_property(&obj, "foo", Some("Test validation error")),
            case,
        );
        assert_eq!(err.context(), Some("Test validation error"));
    }
}

#[test]
fn test_inherited_properties_do_not_count() {
    // GIVEN an instance whose class prototype defines `describe`
    let ctors = constructors();
    let v = ctors.validator();
    let instance = ctors.new_instance(ctors.sub);

    // WHEN
    let err = expect_fails(
        v.assert_has_property(&instance, "describe", None),
        "new SubConstructor() owns describe",
    );

    // THEN
    assert!(matches!(
        err.kind(),
        ValidationErrorKind::MissingProperty { inherited: true, .. }
    ));
    assert!(ctors
        .registry
        .lookup_property(&instance, "describe")
        .is_some());
}

#[test]
fn test_property_type_of_fails_on_mismatch() {
    let v = validator();

    for (case, obj, type_name) in [
        ("{foo: 'bar'}.foo function", holding("bar"), "function"),
        ("{foo: 'bar'}.foo number", holding("bar"), "number"),
        ("{foo: 'bar'}.foo boolean", holding("bar"), "boolean"),
        ("{foo: 'bar'}.foo object", holding("bar"), "object"),
        ("{foo: {}}.foo string", holding(Object::new()), "string"),
        ("{foo: {}}.foo number", holding(Object::new()), "number"),
        ("{foo: {}}.foo function", holding(Object::new()), "function"),
        ("{foo: {}}.foo boolean", holding(Object::new()), "boolean"),
        ("{foo: null}.foo string", holding(Value::Null), "string"),
        ("{foo: 123}.foo string", holding(123), "string"),
        ("{}.foo string", Value::Object(Object::new()), "string"),
    ] {
        expect_fails(
            v.assert_property_type_of(&obj, "foo", type_name, Some("Test validation error")),
            case,
        );
    }
}

#[test]
fn test_property_type_of_passes_on_match() {
    let v = validator();

    for (case, obj, type_name) in [
        ("{foo: 'bar'}.foo string", holding("bar"), "string"),
        ("{foo: {}}.foo object", holding(Object::new()), "object"),
        ("{foo: []}.foo object", holding(Value::Array(vec![])), "object"),
        ("{foo: null}.foo object", holding(Value::Null), "object"),
        ("{foo: undefined}.foo undefined", holding(Value::Undefined), "undefined"),
    ] {
        expect_passes(
            v.assert_property_type_of(&obj, "foo", type_name, Some("Test validation error")),
            case,
        );
    }
}

#[test]
fn test_array_and_string_own_length() {
    let v = validator();

    expect_passes(
        v.assert_property_type_of(&Value::Array(vec![]), "length", "number", None),
        "[].length number",
    );
    expect_passes(
        v.assert_property_type_of(&Value::from("123"), "0", "string", None),
        "'123'[0] string",
    );
}
