use crate::{
    data_type::DataType,
    operators::{FloatOpsFactory, MakeOperators, OperatorTable, Operation},
    parser::{MatchLiteral, NumberMatcher},
};
use std::{
    collections::HashMap,
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
};

mod evaluate;
mod program;
mod render;
#[cfg(feature = "serde")]
mod serde;

pub use evaluate::Evaluation;

/// Values of variables by name. The store is read whenever the stack is evaluated.
pub type VarStore<T> = HashMap<String, T>;

/// This is the core data type, a stack of operands and operations in reverse polish
/// notation that is evaluated after every push.
///
/// ```rust
/// use rpnex::RpnBrain;
///
/// let mut brain = RpnBrain::<f64>::new();
/// brain.push_operand(1.0);
/// brain.push_operand(2.0);
/// brain.perform_operation("+");
/// brain.push_variable("x");
/// // x is not bound yet
/// assert_eq!(brain.perform_operation("×").result, None);
/// brain.variable_values.insert("x".to_string(), 3.0);
/// assert_eq!(brain.evaluate().result, Some(9.0));
/// assert_eq!(brain.render(), "(1+2)×x");
/// ```
/// The operator table is created once from the factory `OF` and the literal matcher `LM`
/// decides which tokens are operands when a program is imported, see
/// [`import_program`](RpnBrain::import_program).
#[derive(Clone)]
pub struct RpnBrain<T = f64, OF = FloatOpsFactory<T>, LM = NumberMatcher> {
    stack: Vec<Operation<T>>,
    known_ops: OperatorTable<T>,
    /// Variable bindings that can be read and written by the caller at any time.
    pub variable_values: VarStore<T>,
    ops_factory_dummy: PhantomData<OF>,
    literal_matcher_dummy: PhantomData<LM>,
}

impl<T, OF, LM> RpnBrain<T, OF, LM>
where
    T: DataType,
    OF: MakeOperators<T>,
    LM: MatchLiteral,
{
    pub fn new() -> Self {
        RpnBrain {
            stack: vec![],
            known_ops: OperatorTable::make::<OF>(),
            variable_values: VarStore::new(),
            ops_factory_dummy: PhantomData,
            literal_matcher_dummy: PhantomData,
        }
    }

    pub fn push_operand(&mut self, operand: T) -> Evaluation<T> {
        self.stack.push(Operation::Operand(operand));
        self.evaluate()
    }

    /// Pushes a reference to the variable `name` that is resolved against
    /// [`variable_values`](RpnBrain::variable_values) during evaluation.
    pub fn push_variable(&mut self, name: &str) -> Evaluation<T> {
        self.stack.push(Operation::Variable(name.to_string()));
        self.evaluate()
    }

    /// Pushes the constant `symbol` if the operator table contains it, otherwise the stack
    /// is left untouched. The stack is re-evaluated in both cases.
    pub fn push_constant(&mut self, symbol: &str) -> Evaluation<T> {
        if let Some(constant) = self.known_ops.constant(symbol) {
            self.stack.push(constant.clone());
        }
        self.evaluate()
    }

    /// Pushes the unary or binary operation `symbol` if the operator table contains it
    /// and the stack is not empty, otherwise the stack is left untouched. The stack is
    /// re-evaluated in both cases.
    pub fn perform_operation(&mut self, symbol: &str) -> Evaluation<T> {
        if self.stack.is_empty() {
            return self.evaluate();
        }
        if let Some(operation) = self.known_ops.operator(symbol) {
            self.stack.push(operation.clone());
        }
        self.evaluate()
    }

    /// Clears the stack and the variable store.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.variable_values.clear();
    }

    pub fn set_variable(&mut self, name: &str, value: T) -> Option<T> {
        self.variable_values.insert(name.to_string(), value)
    }

    pub fn variable(&self, name: &str) -> Option<T> {
        self.variable_values.get(name).copied()
    }

    pub fn stack(&self) -> &[Operation<T>] {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn known_ops(&self) -> &OperatorTable<T> {
        &self.known_ops
    }
}

impl<T, OF, LM> Default for RpnBrain<T, OF, LM>
where
    T: DataType,
    OF: MakeOperators<T>,
    LM: MatchLiteral,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, OF, LM> Debug for RpnBrain<T, OF, LM>
where
    T: DataType,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("RpnBrain")
            .field("stack", &self.stack)
            .field("variable_values", &self.variable_values)
            .finish()
    }
}
