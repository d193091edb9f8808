use super::{RpnBrain, VarStore};
use crate::{
    data_type::DataType,
    format_rpnerr,
    operators::{MakeOperators, Operation},
    parser::MatchLiteral,
    RpnResult,
};
use log::debug;

/// Result of evaluating the stack together with a human readable trace of the stack and
/// the entries that were not consumed. The trace is informational only.
#[derive(Clone, PartialEq, Debug)]
pub struct Evaluation<T> {
    pub result: Option<T>,
    pub trace: String,
}

impl<T: Copy> Evaluation<T> {
    /// Returns the result or an error that contains the trace if there is none.
    pub fn value(&self) -> RpnResult<T> {
        self.result.ok_or_else(|| format_rpnerr!("no result for {}", self.trace))
    }
}

fn list_ops<T: DataType>(ops: &[Operation<T>]) -> String {
    let symbols = ops.iter().map(|op| op.symbol()).collect::<Vec<_>>();
    format!("[{}]", symbols.join(", "))
}

/// Operation whose operands are still being evaluated.
enum Pending<T> {
    Unary(fn(T) -> T),
    BinaryFirst(fn(T, T) -> T),
    /// The first operand is known, the second one is being evaluated.
    BinarySecond(fn(T, T) -> T, T),
}

/// Evaluates the last entry of `ops` and returns the result together with the entries
/// that have not been consumed.
///
/// Operations are walked from the end of `ops` towards its beginning with an explicit
/// stack of pending operations, so the depth of the expression is only bounded by memory.
/// For binary operations the operand that is evaluated first, i.e., the one closer to the
/// end of `ops`, is passed as first argument. If that operand is missing, the second one
/// is not evaluated.
pub fn evaluate_ops<'a, T: DataType>(
    ops: &'a [Operation<T>],
    vars: &VarStore<T>,
) -> (Option<T>, &'a [Operation<T>]) {
    let mut pending = vec![];
    let mut rest = ops;
    'descend: loop {
        let (mut result, remaining) = match rest.split_last() {
            None => (None, rest),
            Some((op, remaining)) => match op {
                Operation::Operand(x) | Operation::Constant(_, x) => (Some(*x), remaining),
                Operation::Variable(name) => (vars.get(name).copied(), remaining),
                Operation::UnaryOperation(_, f) => {
                    pending.push(Pending::Unary(*f));
                    rest = remaining;
                    continue 'descend;
                }
                Operation::BinaryOperation(_, f) => {
                    pending.push(Pending::BinaryFirst(*f));
                    rest = remaining;
                    continue 'descend;
                }
            },
        };
        while let Some(op) = pending.pop() {
            match op {
                Pending::Unary(f) => result = result.map(f),
                Pending::BinaryFirst(f) => {
                    if let Some(operand_1) = result {
                        pending.push(Pending::BinarySecond(f, operand_1));
                        rest = remaining;
                        continue 'descend;
                    }
                }
                Pending::BinarySecond(f, operand_1) => {
                    result = result.map(|operand_2| f(operand_1, operand_2));
                }
            }
        }
        return (result, remaining);
    }
}

impl<T, OF, LM> RpnBrain<T, OF, LM>
where
    T: DataType,
    OF: MakeOperators<T>,
    LM: MatchLiteral,
{
    /// Evaluates the whole stack starting from its top without modifying it.
    pub fn evaluate(&self) -> Evaluation<T> {
        let (result, remaining) = evaluate_ops(&self.stack, &self.variable_values);
        let result_str = match result {
            Some(x) => format!("{}", x),
            None => "none".to_string(),
        };
        let trace = format!(
            "{} = {} with {} left over",
            list_ops(&self.stack),
            result_str,
            list_ops(remaining)
        );
        debug!("{}", trace);
        Evaluation { result, trace }
    }
}
