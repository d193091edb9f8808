use super::RpnBrain;
use crate::{
    data_type::DataType,
    definitions::N_EXPRS_ON_STACK,
    operators::{MakeOperators, Operation},
    parser::MatchLiteral,
};
use smallvec::SmallVec;
use std::fmt::{self, Display, Formatter};

const MISSING_OPERAND: &str = "?";

/// A binary operation is put into parentheses if the next operator on the stack has the
/// same symbol or the same precedence. Operands in between are skipped. This is a local
/// lookahead and not a complete precedence analysis.
fn needs_parens<T: DataType>(op: &Operation<T>, following: &[Operation<T>]) -> bool {
    match following.iter().find(|next| next.is_operator()) {
        Some(next) => next.symbol() == op.symbol() || next.precedence() == op.precedence(),
        None => false,
    }
}

/// Renders `ops` from the bottom of the stack to its top as comma separated infix
/// expressions. Missing operands of binary operations are shown as `?`, unary operations
/// without operand are skipped.
pub fn render_ops<T: DataType>(ops: &[Operation<T>]) -> String {
    let mut exprs = SmallVec::<[String; N_EXPRS_ON_STACK]>::new();
    for (i, op) in ops.iter().enumerate() {
        match op {
            Operation::Operand(_) | Operation::Constant(..) | Operation::Variable(_) => {
                exprs.push(op.symbol())
            }
            Operation::UnaryOperation(repr, _) => {
                if let Some(operand) = exprs.pop() {
                    exprs.push(format!("{}({})", repr, operand));
                }
            }
            Operation::BinaryOperation(repr, _) => {
                let right = exprs.pop();
                let left = exprs.pop();
                let expr = match (left, right) {
                    (Some(left), Some(right)) => format!("{}{}{}", left, repr, right),
                    (_, Some(right)) => format!("{}{}{}", MISSING_OPERAND, repr, right),
                    _ => format!("{}{}{}", MISSING_OPERAND, repr, MISSING_OPERAND),
                };
                if needs_parens(op, &ops[i + 1..]) {
                    exprs.push(format!("({})", expr));
                } else {
                    exprs.push(expr);
                }
            }
        }
    }
    exprs.join(", ")
}

impl<T, OF, LM> RpnBrain<T, OF, LM>
where
    T: DataType,
    OF: MakeOperators<T>,
    LM: MatchLiteral,
{
    /// Creates an infix representation of the stack.
    /// ```rust
    /// use rpnex::RpnBrain;
    ///
    /// let mut brain = RpnBrain::<f64>::new();
    /// brain.push_operand(3.0);
    /// brain.push_operand(5.0);
    /// brain.push_operand(4.0);
    /// brain.perform_operation("+");
    /// brain.perform_operation("√");
    /// brain.perform_operation("÷");
    /// brain.push_constant("π");
    /// assert_eq!(brain.render(), "3÷√(5+4), π");
    /// ```
    pub fn render(&self) -> String {
        render_ops(&self.stack)
    }
}

impl<T, OF, LM> Display for RpnBrain<T, OF, LM>
where
    T: DataType,
    OF: MakeOperators<T>,
    LM: MatchLiteral,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod test {
    use super::render_ops;
    use crate::{brain::RpnBrain, operators::Operation};

    fn brain_from(tokens: &[&str]) -> RpnBrain {
        let mut brain = RpnBrain::new();
        brain.import_program(tokens);
        brain
    }

    #[test]
    fn test_render() {
        let test = |tokens: &[&str], reference: &str| {
            assert_eq!(brain_from(tokens).render(), reference);
        };
        test(&[], "");
        test(&["1", "2", "+", "3", "×"], "(1+2)×3");
        test(&["1", "2", "3", "+", "×"], "1×(2+3)");
        test(&["1", "2", "+", "3", "4", "-", "÷"], "(1+2)÷(3-4)");
        test(&["1", "2", "+", "√"], "√(1+2)");
        test(&["2", "√", "±"], "±(√(2))");
        test(&["π", "M", "×", "cos"], "cos(π×M)");
        test(&["1.5", "2", "3"], "1.5, 2, 3");
        test(&["1", "2", "+", "3"], "1+2, 3");
    }

    #[test]
    fn test_render_missing_operands() {
        let test = |tokens: &[&str], reference: &str| {
            assert_eq!(brain_from(tokens).render(), reference);
        };
        test(&["+"], "?+?");
        test(&["3", "+"], "?+3");
        test(&["+", "×"], "?×(?+?)");
        test(&["√"], "");
        test(&["√", "4"], "4");
        test(&["4", "+", "√"], "√(?+4)");
    }

    #[test]
    fn test_lookahead_skips_leaves() {
        let ops = vec![
            Operation::Operand(1.0),
            Operation::Operand(2.0),
            Operation::BinaryOperation("+", |a: f64, b| a + b),
            Operation::Operand(3.0),
            Operation::Variable("x".to_string()),
            Operation::UnaryOperation("sin", |a: f64| a.sin()),
        ];
        // only an upcoming binary operation triggers parentheses
        assert_eq!(render_ops(&ops), "1+2, 3, sin(x)");
    }

    #[test]
    fn test_display() {
        let brain = brain_from(&["1", "2", "+", "3", "×"]);
        let rendered = brain.render();
        assert_eq!(format!("{}", brain), rendered);
        assert_eq!(brain.render(), rendered);
    }
}
