use log::warn;
use rpnex::{parse_token, NumberMatcher, Operation, RpnBrain};
use std::io::{self, BufRead, Write};

/// Pushes each whitespace separated token of `line`. Besides symbols of the operator
/// table, numbers, and variable names, `reset` resets the brain and `name=value` binds
/// a variable.
fn process_line(brain: &mut RpnBrain, line: &str) {
    for token in line.split_whitespace() {
        if token == "reset" {
            brain.reset();
            continue;
        }
        if let Some((name, value)) = token.split_once('=') {
            match value.parse::<f64>() {
                Ok(value) => {
                    brain.set_variable(name, value);
                }
                Err(e) => warn!("cannot bind {} to '{}', {}", name, value, e),
            }
            continue;
        }
        match parse_token::<f64, NumberMatcher>(token, brain.known_ops()) {
            Some(Operation::Operand(x)) => {
                brain.push_operand(x);
            }
            Some(Operation::Variable(name)) => {
                brain.push_variable(&name);
            }
            Some(Operation::Constant(..)) => {
                brain.push_constant(token);
            }
            Some(Operation::UnaryOperation(..)) | Some(Operation::BinaryOperation(..)) => {
                brain.perform_operation(token);
            }
            None => warn!("skipping unknown token '{}'", token),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let mut brain = RpnBrain::<f64>::new();
    let mut stdout = io::stdout();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        stdout.write_all("> ".as_bytes())?;
        stdout.flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        process_line(&mut brain, line.trim());
        match brain.evaluate().result {
            Some(x) => println!("{} = {}", brain, x),
            None => println!("{}", brain),
        }
    }
    Ok(())
}
