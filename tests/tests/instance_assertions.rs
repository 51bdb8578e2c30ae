//! Instance-of assertions over a class hierarchy.

use attest_tests::prelude::*;

#[test]
fn test_fails_when_not_an_instance() {
    // GIVEN
    let ctors = constructors();
    let v = ctors.validator();
    let cases: Vec<(&str, Value, ClassId)> = vec![
        ("{} instanceof TestConstructor", Object::new().into(), ctors.test),
        ("123 instanceof SubConstructor", 123.into(), ctors.sub),
        ("'123' instanceof SubConstructor", "123".into(), ctors.sub),
        ("true instanceof SubConstructor", true.into(), ctors.sub),
        ("[] instanceof SubConstructor", Value::Array(vec![]), ctors.sub),
        (
            "function() {} instanceof SubConstructor",
            Function::anonymous().into(),
            ctors.sub,
        ),
    ];

    // THEN
    for (case, value, class) in cases {
        expect_fails(
            v.assert_instance_of(&value, class, Some("TestType"), Some("Test validation error")),
            case,
        );
    }
}

#[test]
fn test_passes_for_instances_and_subclass_instances() {
    // GIVEN
    let ctors = constructors();
    let v = ctors.validator();

    // THEN
    expect_passes(
        v.assert_instance_of(&ctors.new_instance(ctors.test), ctors.test, Some("TestType"), None),
        "new TestConstructor() instanceof TestConstructor",
    );
    expect_passes(
        v.assert_instance_of(&ctors.new_instance(ctors.sub), ctors.test, Some("TestType"), None),
        "new SubConstructor() instanceof TestConstructor",
    );
    expect_passes(
        v.assert_instance_of(&ctors.new_instance(ctors.sub), ctors.sub, Some("TestType"), None),
        "new SubConstructor() instanceof SubConstructor",
    );
}

#[test]
fn test_superclass_instance_is_not_a_subclass_instance() {
    let ctors = constructors();
    let v = ctors.validator();

    let err = expect_fails(
        v.assert(&ctors.new_instance(ctors.test))
            .instance_of(ctors.sub, None, None),
        "new TestConstructor() instanceof SubConstructor",
    );

    assert_eq!(
        err.to_string(),
        "Failed asserting [object Object] is instance of SubConstructor"
    );
}

#[test]
fn test_builtin_classes() {
    let v = validator();

    expect_passes(
        v.assert(&Value::Array(vec![])).instance_of(ClassId::ARRAY, None, None),
        "[] instanceof Array",
    );
    expect_passes(
        v.assert(&Value::Array(vec![])).instance_of(ClassId::OBJECT, None, None),
        "[] instanceof Object",
    );
    expect_passes(
        v.assert(&Function::anonymous().into())
            .instance_of(ClassId::FUNCTION, None, None),
        "function() {} instanceof Function",
    );
    expect_fails(
        v.assert(&Value::Null).instance_of(ClassId::OBJECT, None, None),
        "null instanceof Object",
    );
}

#[test]
fn test_property_instance_of() {
    // GIVEN
    let ctors = constructors();
    let v = ctors.validator();
    let holding = |value: Value| Value::Object(Object::new().with_property("foo", value));

    // THEN failing
    for (case, obj, class) in [
        ("{foo: 'bar'}.foo instanceof TestConstructor", holding("bar".into()), ctors.test),
        ("{foo: 'bar'}.foo instanceof SubConstructor", holding("bar".into()), ctors.sub),
        ("{foo: {}}.foo instanceof TestConstructor", holding(Object::new().into()), ctors.test),
        ("null.foo instanceof TestConstructor", Value::Null, ctors.test),
    ] {
        expect_fails(
            v.assert_property_instance_of(&obj, "foo", class, Some("TestType"), None),
            case,
        );
    }

    // THEN passing
    for (case, obj, class) in [
        (
            "{foo: new TestConstructor()}.foo instanceof TestConstructor",
            holding(ctors.new_instance(ctors.test)),
            ctors.test,
        ),
        (
            "{foo: new SubConstructor()}.foo instanceof TestConstructor",
            holding(ctors.new_instance(ctors.sub)),
            ctors.test,
        ),
        (
            "{foo: new SubConstructor()}.foo instanceof SubConstructor",
            holding(ctors.new_instance(ctors.sub)),
            ctors.sub,
        ),
    ] {
        expect_passes(
            v.assert_property_instance_of(&obj, "foo", class, Some("TestType"), None),
            case,
        );
    }
}
