#![doc(html_root_url = "https://docs.rs/rpnex/0.1.0")]
//! Rpnex is a small engine for expressions in reverse polish notation. Operands, constants,
//! variables, and operations are pushed onto a stack one at a time. After each push the
//! stack is evaluated from its top and the result is returned together with a trace.
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use rpnex::prelude::*;
//!
//! let mut brain = RpnBrain::<f64>::new();
//! brain.push_operand(4.0);
//! brain.push_operand(2.0);
//! let evaluation = brain.perform_operation("÷");
//! assert_eq!(evaluation.value()?, 2.0);
//! assert_eq!(evaluation.trace, "[4, 2, ÷] = 2 with [] left over");
//! #
//! #     Ok(())
//! # }
//! ```
//! Binary operations receive the operand that has been pushed last as first argument.
//! The default operations `÷` and `-` are defined such that the stack `4 2 ÷` reads as
//! `4÷2`. Incomplete stacks do not fail, they evaluate to `None`.
//!
//! The stack can be rendered as infix expression and exported to a list of symbols.
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use rpnex::prelude::*;
//!
//! let mut brain = RpnBrain::<f64>::new();
//! brain.push_operand(1.0);
//! brain.push_operand(2.0);
//! brain.perform_operation("+");
//! brain.push_variable("r");
//! brain.perform_operation("×");
//! assert_eq!(brain.evaluate().result, None);
//! brain.set_variable("r", 3.0);
//! assert_eq!(brain.evaluate().value()?, 9.0);
//! assert_eq!(brain.render(), "(1+2)×r");
//!
//! let program = brain.export_program();
//! assert_eq!(program, vec!["1", "2", "+", "r", "×"]);
//! let mut other = RpnBrain::<f64>::new();
//! other.import_program(&program);
//! assert_eq!(other.render(), brain.render());
//! #
//! #     Ok(())
//! # }
//! ```
//! Custom operations are defined by implementing [`MakeOperators`](MakeOperators).
//! With the feature `serde`, an [`RpnBrain`](RpnBrain) serializes to its exported program.
//!
//! Traces of evaluations and skipped tokens of imported programs are logged on debug level
//! via the [`log`](https://docs.rs/log) facade.

mod brain;
mod data_type;
mod operators;
mod parser;
mod result;
mod util;

pub use {
    brain::{Evaluation, RpnBrain, VarStore},
    data_type::DataType,
    operators::{FloatOpsFactory, MakeOperators, OperatorTable, Operation, Precedence},
    parser::{is_variable_name, parse_program, parse_token, MatchLiteral, NumberMatcher},
    result::{RpnError, RpnResult},
};

/// To use the basic functionality of Rpnex one can `use rpnex::prelude::*;`.
pub mod prelude {
    pub use super::{Evaluation, MakeOperators, Operation, RpnBrain, RpnError, RpnResult};
}

mod definitions {
    pub const N_EXPRS_ON_STACK: usize = 16;
}
