#[cfg(test)]
mod utils;
use itertools::iproduct;
use regex::Regex;
use rpnex::{prelude::*, FloatOpsFactory, MatchLiteral, NumberMatcher, OperatorTable};
use std::fs::{self, File};
use std::io::{self, BufRead};
use std::str::FromStr;
use utils::assert_float_eq_f64;

#[test]
fn test_version() {
    // make sure the version strings in the Cargo.toml and lib.rs coincide
    let file = File::open("src/lib.rs").unwrap();
    let version_line_lib = io::BufReader::new(file)
        .lines()
        .find(|line| line.as_ref().unwrap().contains("html_root_url"))
        .unwrap()
        .unwrap();
    let re_version = Regex::new(r#"[0-9]{1,4}\.[0-9]{1,4}\.[0-9]{1,4}"#).unwrap();
    let match_lib = re_version.find(&version_line_lib).unwrap().as_str();

    let toml_string = fs::read_to_string("Cargo.toml").unwrap();
    let cargo_toml: toml::Value = toml::from_str(&toml_string).unwrap();
    let package = cargo_toml.get("package").unwrap().as_table().unwrap();
    let version = package.get("version").unwrap().as_str().unwrap();
    assert_eq!(match_lib, version);
}

#[test]
fn test_operands_only() {
    let mut brain = RpnBrain::<f64>::new();
    for _ in 0..100 {
        let x = (rand::random::<f64>() - 0.5) * 1e4;
        assert_eq!(brain.push_operand(x).result, Some(x));
        assert_eq!(brain.evaluate().result, Some(x));
    }
    assert_eq!(brain.len(), 100);
}

#[test]
fn test_arithmetic() -> RpnResult<()> {
    let mut brain = RpnBrain::<f64>::new();
    brain.push_operand(3.0);
    brain.push_operand(4.0);
    assert_eq!(brain.perform_operation("+").value()?, 7.0);

    brain.reset();
    brain.push_operand(4.0);
    brain.push_operand(2.0);
    assert_eq!(brain.perform_operation("÷").value()?, 2.0);

    brain.reset();
    brain.push_operand(2.0);
    assert_eq!(brain.perform_operation("√").value()?, 1.4142135623730951);

    brain.reset();
    brain.push_operand(10.0);
    brain.push_operand(4.0);
    assert_eq!(brain.perform_operation("-").value()?, 6.0);
    brain.push_operand(2.0);
    assert_eq!(brain.perform_operation("×").value()?, 12.0);
    assert_eq!(brain.perform_operation("±").value()?, -12.0);
    Ok(())
}

#[test]
fn test_operand_grid() {
    let operands = [-3.5, -1.0, 0.25, 2.0, 7.0];
    for (a, b) in iproduct!(operands, operands) {
        let mut brain = RpnBrain::<f64>::new();
        brain.push_operand(a);
        brain.push_operand(b);
        for (symbol, reference) in [("+", a + b), ("-", a - b), ("×", a * b), ("÷", a / b)] {
            let mut brain = brain.clone();
            assert_float_eq_f64(brain.perform_operation(symbol).result.unwrap(), reference);
        }
    }
}

#[test]
fn test_trigonometry() -> RpnResult<()> {
    let mut brain = RpnBrain::<f64>::new();
    brain.push_constant("π");
    brain.push_operand(3.0);
    brain.perform_operation("÷");
    let cos = brain.perform_operation("cos").value()?;
    assert_float_eq_f64(cos, 0.5);
    brain.push_constant("π");
    brain.push_operand(6.0);
    brain.perform_operation("÷");
    brain.perform_operation("sin");
    assert_float_eq_f64(brain.perform_operation("+").value()?, 1.0);
    assert_eq!(brain.render(), "cos(π÷3)+sin(π÷6)");
    Ok(())
}

#[test]
fn test_empty_stack() {
    let mut brain = RpnBrain::<f64>::new();
    assert_eq!(brain.evaluate().result, None);
    assert_eq!(brain.perform_operation("+").result, None);
    assert!(brain.is_empty());
    assert_eq!(brain.render(), "");
    assert_eq!(brain.export_program(), Vec::<String>::new());
    assert_eq!(brain.perform_operation("√").result, None);
    assert!(brain.is_empty());
    assert_eq!(brain.perform_operation("unknown").result, None);
    assert!(brain.is_empty());
    assert_eq!(brain.push_constant("unknown").result, None);
    assert!(brain.is_empty());
}

#[test]
fn test_deep_stack() {
    const N: usize = 100_000;
    // left-deep: 1 1 + 1 + 1 + ...
    let mut program = vec!["1"];
    for _ in 0..N {
        program.extend(["1", "+"]);
    }
    let mut brain = RpnBrain::<f64>::new();
    brain.import_program(program);
    assert_eq!(brain.len(), 2 * N + 1);
    assert_eq!(brain.evaluate().result, Some((N + 1) as f64));

    // right-deep: 1 1 1 ... + + +
    let mut program = vec!["1"; N + 1];
    program.extend(vec!["+"; N]);
    let mut brain = RpnBrain::<f64>::new();
    brain.import_program(program);
    let evaluation = brain.evaluate();
    assert_eq!(evaluation.result, Some((N + 1) as f64));
    assert!(evaluation.trace.ends_with("with [] left over"));

    // deep chain of unary operations with an unbound variable at the bottom
    let mut program = vec!["x"];
    program.extend(vec!["±"; N]);
    let mut brain = RpnBrain::<f64>::new();
    brain.import_program(program);
    assert_eq!(brain.evaluate().result, None);
    brain.set_variable("x", 2.0);
    assert_eq!(brain.evaluate().result, Some(2.0));
}

#[test]
fn test_reset() {
    let mut brain = RpnBrain::<f64>::new();
    brain.set_variable("x", 1.0);
    brain.push_variable("x");
    brain.push_operand(5.0);
    brain.perform_operation("×");
    assert_eq!(brain.evaluate().result, Some(5.0));
    brain.reset();
    assert_eq!(brain.evaluate().result, None);
    assert_eq!(brain.render(), "");
    assert!(brain.variable_values.is_empty());
}

#[test]
fn test_ieee_semantics() {
    let mut brain = RpnBrain::<f64>::new();
    brain.push_operand(1.0);
    brain.push_operand(0.0);
    assert_eq!(brain.perform_operation("÷").result, Some(f64::INFINITY));
    brain.perform_operation("±");
    assert_eq!(brain.evaluate().result, Some(f64::NEG_INFINITY));
    brain.perform_operation("√");
    assert!(brain.evaluate().result.unwrap().is_nan());
    assert_eq!(brain.render(), "√(±(1÷0))");
}

#[test]
fn test_variables() {
    let mut brain = RpnBrain::<f64>::new();
    brain.push_operand(2.0);
    brain.push_variable("x");
    assert_eq!(brain.perform_operation("-").result, None);
    brain.variable_values.insert("x".to_string(), 0.5);
    assert_eq!(brain.evaluate().result, Some(1.5));
    *brain.variable_values.get_mut("x").unwrap() = 3.0;
    assert_eq!(brain.evaluate().result, Some(-1.0));
    assert_eq!(brain.render(), "2-x");
}

#[test]
fn test_unbound_sibling() {
    // the unbound variable only affects the expression it is part of
    let mut brain = RpnBrain::<f64>::new();
    brain.push_operand(1.0);
    brain.push_operand(2.0);
    brain.perform_operation("+");
    brain.push_variable("y");
    let evaluation = brain.perform_operation("√");
    assert_eq!(evaluation.result, None);
    assert_eq!(evaluation.trace, "[1, 2, +, y, √] = none with [1, 2, +] left over");
    brain.set_variable("y", 16.0);
    let evaluation = brain.evaluate();
    assert_eq!(evaluation.result, Some(4.0));
    assert_eq!(evaluation.trace, "[1, 2, +, y, √] = 4 with [1, 2, +] left over");
    assert_eq!(brain.render(), "1+2, √(y)");
}

#[test]
fn test_render() {
    let mut brain = RpnBrain::<f64>::new();
    brain.push_operand(1.0);
    brain.push_operand(2.0);
    brain.perform_operation("+");
    brain.push_operand(3.0);
    brain.perform_operation("×");
    assert_eq!(brain.render(), "(1+2)×3");
    assert_eq!(brain.render(), brain.render());
    assert_eq!(format!("{}", brain), "(1+2)×3");

    let brain = RpnBrain::<f64>::from_str("1 2 + 3 + 4 +").unwrap();
    assert_eq!(brain.render(), "((1+2)+3)+4");
    let brain = RpnBrain::<f64>::from_str("1 2 3 4 + + +").unwrap();
    assert_eq!(brain.render(), "1+(2+(3+4))");
    let brain = RpnBrain::<f64>::from_str("2.5 ± π × 3 -").unwrap();
    assert_eq!(brain.render(), "(±(2.5)×π)-3");
}

#[test]
fn test_program_roundtrip() {
    let programs = [
        "1 2 + 3 ×",
        "4 2 ÷ √ π × 0.1 +",
        "0.3 cos 1e-7 sin ± -",
        "1 2 3",
        "7 + ×",
        "1 0 ÷ 0 ÷",
    ];
    for program in programs {
        let brain = RpnBrain::<f64>::from_str(program).unwrap();
        let exported = brain.export_program();
        let mut imported = RpnBrain::<f64>::new();
        imported.import_program(&exported);
        assert_eq!(imported.export_program(), exported);
        assert_eq!(imported.render(), brain.render());
        match (imported.evaluate().result, brain.evaluate().result) {
            (Some(x), Some(y)) if x.is_nan() => assert!(y.is_nan()),
            (x, y) => assert_eq!(x, y),
        }
    }
}

#[test]
fn test_roundtrip_random_operands() {
    let mut brain = RpnBrain::<f64>::new();
    for _ in 0..50 {
        brain.push_operand(rand::random::<f64>() * 1e-3);
        brain.push_operand(rand::random::<f64>() * 1e9);
        brain.perform_operation("÷");
        brain.perform_operation("+");
    }
    let mut imported = RpnBrain::<f64>::new();
    imported.import_program(brain.export_program());
    assert_eq!(imported.stack(), brain.stack());
    assert_eq!(imported.evaluate().result, brain.evaluate().result);
}

#[test]
fn test_custom_ops() {
    #[derive(Clone)]
    struct PowOpsFactory;
    impl MakeOperators<f64> for PowOpsFactory {
        fn make() -> Vec<Operation<f64>> {
            let mut ops = FloatOpsFactory::<f64>::make();
            ops.push(Operation::BinaryOperation("^", |a: f64, b| b.powf(a)));
            ops.push(Operation::UnaryOperation("x²", |a: f64| a * a));
            ops.push(Operation::Constant("e", std::f64::consts::E));
            ops
        }
    }
    let mut brain = RpnBrain::<f64, PowOpsFactory>::new();
    brain.push_operand(2.0);
    brain.push_operand(10.0);
    assert_eq!(brain.perform_operation("^").result, Some(1024.0));
    assert_eq!(brain.perform_operation("x²").result, Some(1048576.0));
    brain.push_constant("e");
    brain.perform_operation("÷");
    assert_eq!(brain.render(), "x²(2^10)÷e");
    assert_eq!(brain.known_ops().len(), 12);

    let table = OperatorTable::<f64>::make::<PowOpsFactory>();
    assert!(table.operator("^").is_some());
    assert!(table.constant("e").is_some());
}

#[test]
fn test_matcher() {
    assert_eq!(NumberMatcher::is_literal("12.5e3+"), Some("12.5e3"));
    assert_eq!(NumberMatcher::is_literal("π"), None);
}

#[test]
fn test_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RpnBrain<f64>>();
    assert_send_sync::<Evaluation<f64>>();
    assert_send_sync::<RpnError>();
}
