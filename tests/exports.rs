use mathbind::{
    CallError, Error,
    demo::{self, STEPS, Step, Template},
    exports::{self, EXPORTS},
    export_listing,
    value::Value,
};

fn assert_call(name: &str, args: &[Value], expected: Value) {
    match exports::call(name, args) {
        Ok(v) => assert_eq!(v, expected, "{name}({args:?})"),
        Err(e) => panic!("Call to {name} failed: {e}"),
    }
}

fn assert_call_error(name: &str, args: &[Value]) -> CallError {
    match exports::call(name, args) {
        Ok(v) => panic!("Call to {name} succeeded with {v} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn demo_prints_the_four_expected_lines() {
    let lines = demo::lines().unwrap();

    assert_eq!(lines,
               vec!["5 + 3 = 8", "4.5 * 2.0 = 9.0", "sqrt(16.0) = 4.0", "Is 42 even? True"]);
}

#[test]
fn demo_run_writes_newline_terminated_output() {
    let mut out = Vec::new();
    demo::run(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(),
               "5 + 3 = 8\n4.5 * 2.0 = 9.0\nsqrt(16.0) = 4.0\nIs 42 even? True\n");
}

#[test]
fn demo_steps_only_reference_existing_exports() {
    for step in STEPS {
        let export = exports::lookup(step.function).unwrap();
        assert_eq!(export.params.len(), step.args.len(), "{}", step.function);
    }
}

#[test]
fn export_table_is_in_declaration_order() {
    let names: Vec<_> = EXPORTS.iter().map(|e| e.name).collect();

    assert_eq!(names, ["add", "multiply", "square_root", "is_even"]);
}

#[test]
fn export_listing_shows_signatures_and_docstrings() {
    assert_eq!(export_listing(),
               ["int add(int a, int b): Adds two integers.",
                "double multiply(double a, double b): Multiplies two floating-point numbers.",
                "double square_root(double x): Calculates the square root of a number.",
                "bool is_even(int n): Checks if a number is even."]);
}

#[test]
fn arithmetic_through_the_export_table() {
    assert_call("add", &[Value::Integer(-7), Value::Integer(3)], Value::Integer(-4));
    assert_call("multiply", &[Value::Real(-1.5), Value::Real(4.0)], Value::Real(-6.0));
    assert_call("multiply", &[Value::Integer(3), Value::Real(0.5)], Value::Real(1.5));
    assert_call("square_root", &[Value::Real(2.25)], Value::Real(1.5));
    assert_call("is_even", &[Value::Integer(0)], Value::Bool(true));
    assert_call("is_even", &[Value::Integer(-3)], Value::Bool(false));
    assert_call("is_even", &[Value::Integer(-8)], Value::Bool(true));
}

#[test]
fn square_root_of_negative_is_nan() {
    let result = exports::call("square_root", &[Value::Real(-4.0)]).unwrap();

    assert!(matches!(result, Value::Real(r) if r.is_nan()));
    assert_eq!(result.to_string(), "nan");
}

#[test]
fn unknown_function_fails_to_resolve() {
    let err = assert_call_error("divide", &[Value::Integer(1), Value::Integer(2)]);

    assert_eq!(err, CallError::UnknownFunction { name: "divide".to_string() });
    assert_eq!(err.to_string(), "Unknown function 'divide'.");
}

#[test]
fn wrong_argument_count_is_rejected() {
    let err = assert_call_error("add", &[Value::Integer(1)]);

    assert_eq!(err,
               CallError::ArgumentCountMismatch { name:     "add",
                                                  expected: 2,
                                                  found:    1, });
    assert!(matches!(assert_call_error("square_root", &[]),
                     CallError::ArgumentCountMismatch { found: 0, .. }));
}

#[test]
fn argument_types_are_checked() {
    assert_eq!(assert_call_error("is_even", &[Value::Real(42.0)]),
               CallError::ExpectedInteger { name:  "is_even",
                                            param: "n", });
    assert_eq!(assert_call_error("add", &[Value::Integer(1), Value::Bool(true)]),
               CallError::ExpectedNumber { name:  "add",
                                           param: "b", });
    assert_eq!(assert_call_error("square_root", &[Value::Bool(false)]),
               CallError::ExpectedNumber { name:  "square_root",
                                           param: "x", });
}

#[test]
fn unsafe_integer_promotion_is_rejected() {
    let big = Value::Integer(9_007_199_254_740_992);

    assert_eq!(assert_call_error("square_root", &[big]),
               CallError::LiteralTooLarge { name:  "square_root",
                                            param: "x", });
    assert_eq!(assert_call_error("square_root", &[Value::Integer(-9_007_199_254_740_992)]),
               CallError::LiteralTooLarge { name:  "square_root",
                                            param: "x", });
}

#[test]
fn largest_safe_integer_is_promoted() {
    let result = exports::call("square_root", &[Value::Integer(9_007_199_254_740_991)]).unwrap();

    assert!(matches!(result, Value::Real(r) if r > 94_906_265.0 && r < 94_906_266.0));
}

const UNKNOWN_STEP: Step = Step { function: "divide",
                                  args:     &[Value::Integer(1)],
                                  template: Template::Call("d"), };

#[test]
fn step_with_unknown_function_fails() {
    assert!(matches!(UNKNOWN_STEP.run(),
                     Err(Error::Call(CallError::UnknownFunction { ref name })) if name == "divide"));
}

#[test]
fn failing_step_aborts_the_run_and_writes_nothing() {
    let steps = [STEPS[0], UNKNOWN_STEP, STEPS[3]];
    let mut out = Vec::new();

    assert!(matches!(demo::lines_for(&steps),
                     Err(Error::Call(CallError::UnknownFunction { .. }))));
    assert!(matches!(demo::run_steps(&steps, &mut out),
                     Err(Error::Call(CallError::UnknownFunction { .. }))));
    assert!(out.is_empty());
}

#[test]
fn mismatched_template_falls_back_to_call_notation() {
    let step = Step { function: "square_root",
                      args:     &[Value::Real(9.0)],
                      template: Template::Infix("+"), };

    assert_eq!(step.render(Value::Real(3.0)), "square_root(9.0) = 3.0");
}

#[test]
fn add_overflow_is_an_error() {
    assert_eq!(assert_call_error("add", &[Value::Integer(i64::MAX), Value::Integer(1)]),
               CallError::Overflow { name: "add" });
    assert_eq!(assert_call_error("add", &[Value::Integer(i64::MIN), Value::Integer(-1)]),
               CallError::Overflow { name: "add" });
}

#[test]
fn real_formatting() {
    let cases = [(9.0, "9.0"),
                 (4.5, "4.5"),
                 (0.1, "0.1"),
                 (-0.0, "-0.0"),
                 (1e15, "1000000000000000.0"),
                 (1e16, "1e+16"),
                 (-2.5e20, "-2.5e+20"),
                 (1.5e-5, "1.5e-05"),
                 (1e-4, "0.0001"),
                 (f64::INFINITY, "inf"),
                 (f64::NEG_INFINITY, "-inf"),
                 (f64::NAN, "nan")];

    for (input, expected) in cases {
        assert_eq!(Value::Real(input).to_string(), expected, "formatting {input:?}");
    }
}

#[test]
fn bool_and_integer_formatting() {
    assert_eq!(Value::Bool(true).to_string(), "True");
    assert_eq!(Value::Bool(false).to_string(), "False");
    assert_eq!(Value::Integer(-12).to_string(), "-12");
}
