use crate::data_type::DataType;
use log::trace;
use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
    marker::PhantomData,
};

/// Binding strength of an entry that is used to decide about parentheses when the stack
/// is rendered. It has no influence on the order of evaluation, which is fixed by the
/// position on the stack.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum Precedence {
    /// Binary operations bind loosest.
    Min,
    /// Operands, constants, variables, and unary operations bind tightest.
    Max,
}

/// One entry of the stack of an [`RpnBrain`](crate::RpnBrain).
///
/// Operations of the [`OperatorTable`](OperatorTable) are created by an operator factory,
/// see [`MakeOperators`](MakeOperators). Their functions are plain function pointers,
/// hence non-capturing closures can be used to define them.
#[derive(Clone, Debug)]
pub enum Operation<T> {
    /// Literal pushed by the caller.
    Operand(T),
    /// Named literal such as `π` whose value is fixed by the operator factory.
    Constant(&'static str, T),
    /// Named reference that is looked up in the variable store during evaluation.
    Variable(String),
    UnaryOperation(&'static str, fn(T) -> T),
    /// Binary operation. The function receives the operand that is popped first, i.e.,
    /// the one pushed last, as its first argument.
    BinaryOperation(&'static str, fn(T, T) -> T),
}

impl<T: DataType> Operation<T> {
    /// Representation of the entry as it is rendered and exported, e.g., `÷`, `π`, or `2.5`.
    pub fn symbol(&self) -> String {
        match self {
            Operation::Operand(x) => format!("{}", x),
            Operation::Variable(name) => name.clone(),
            Operation::Constant(repr, _)
            | Operation::UnaryOperation(repr, _)
            | Operation::BinaryOperation(repr, _) => repr.to_string(),
        }
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            Operation::BinaryOperation(..) => Precedence::Min,
            _ => Precedence::Max,
        }
    }

    /// Unary and binary operations are operators, all other entries are leaves.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Operation::UnaryOperation(..) | Operation::BinaryOperation(..)
        )
    }
}

impl<T: DataType> Display for Operation<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// Function pointers are compared by symbol, since their addresses are not guaranteed
// to be unique.
impl<T: PartialEq> PartialEq for Operation<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Operation::Operand(a), Operation::Operand(b)) => a == b,
            (Operation::Variable(a), Operation::Variable(b)) => a == b,
            (Operation::Constant(ra, a), Operation::Constant(rb, b)) => ra == rb && a == b,
            (Operation::UnaryOperation(ra, _), Operation::UnaryOperation(rb, _)) => ra == rb,
            (Operation::BinaryOperation(ra, _), Operation::BinaryOperation(rb, _)) => ra == rb,
            _ => false,
        }
    }
}

/// To use custom operators one needs to create a factory that implements this trait.
/// The factory is passed as type parameter to the [`RpnBrain`](crate::RpnBrain) and
/// invoked once during construction.
///
/// # Example
///
/// ```rust
/// use rpnex::{MakeOperators, Operation, RpnBrain};
/// #[derive(Clone)]
/// struct SomeOpsFactory;
/// impl MakeOperators<f32> for SomeOpsFactory {
///     fn make() -> Vec<Operation<f32>> {
///         vec![
///             Operation::BinaryOperation("^", |a: f32, b| b.powf(a)),
///             Operation::UnaryOperation("exp", |a: f32| a.exp()),
///             Operation::Constant("e", std::f32::consts::E),
///         ]
///     }
/// }
/// let mut brain = RpnBrain::<f32, SomeOpsFactory>::new();
/// brain.push_operand(2.0);
/// brain.push_operand(3.0);
/// assert_eq!(brain.perform_operation("^").result, Some(8.0));
/// // not part of this table
/// assert_eq!(brain.perform_operation("+").result, Some(8.0));
/// ```
pub trait MakeOperators<T>: Clone {
    /// Function that creates a vector of operations. Only constants, unary operations,
    /// and binary operations are taken into the table.
    fn make() -> Vec<Operation<T>>;
}

/// Factory of the default calculator operations for floating point values.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct FloatOpsFactory<T> {
    dummy: PhantomData<T>,
}

impl<T: DataType> MakeOperators<T> for FloatOpsFactory<T> {
    /// Returns the default operations.
    fn make() -> Vec<Operation<T>> {
        vec![
            Operation::BinaryOperation("×", |a: T, b| a * b),
            Operation::BinaryOperation("÷", |a: T, b| b / a),
            Operation::BinaryOperation("+", |a: T, b| a + b),
            Operation::BinaryOperation("-", |a: T, b| b - a),
            Operation::UnaryOperation("√", |a: T| a.sqrt()),
            Operation::UnaryOperation("sin", |a: T| a.sin()),
            Operation::UnaryOperation("cos", |a: T| a.cos()),
            Operation::UnaryOperation("±", |a: T| -a),
            Operation::Constant("π", T::PI()),
        ]
    }
}

/// Immutable mapping from symbols to the operations an [`RpnBrain`](crate::RpnBrain) knows.
#[derive(Clone, Debug)]
pub struct OperatorTable<T> {
    ops: HashMap<&'static str, Operation<T>>,
}

impl<T: DataType> OperatorTable<T> {
    /// Builds the table from the operations of a factory. Operands and variables have no
    /// fixed symbol and are ignored. Later operations replace earlier ones with the same
    /// symbol.
    pub fn from_ops(ops: Vec<Operation<T>>) -> Self {
        let mut table = HashMap::with_capacity(ops.len());
        for op in ops {
            match op {
                Operation::Constant(repr, _)
                | Operation::UnaryOperation(repr, _)
                | Operation::BinaryOperation(repr, _) => {
                    trace!("learning operation {}", repr);
                    table.insert(repr, op);
                }
                Operation::Operand(_) | Operation::Variable(_) => {
                    trace!("ignoring {:?}, it cannot be part of an operator table", op);
                }
            }
        }
        OperatorTable { ops: table }
    }

    pub fn make<OF: MakeOperators<T>>() -> Self {
        Self::from_ops(OF::make())
    }

    pub fn get(&self, symbol: &str) -> Option<&Operation<T>> {
        self.ops.get(symbol)
    }

    /// Returns the entry of `symbol` if it is a constant.
    pub fn constant(&self, symbol: &str) -> Option<&Operation<T>> {
        self.get(symbol).filter(|op| matches!(op, Operation::Constant(..)))
    }

    /// Returns the entry of `symbol` if it is a unary or a binary operation.
    pub fn operator(&self, symbol: &str) -> Option<&Operation<T>> {
        self.get(symbol).filter(|op| op.is_operator())
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Symbols of the table in alphabetical order.
    pub fn symbols(&self) -> Vec<&'static str> {
        let mut symbols = self.ops.keys().copied().collect::<Vec<_>>();
        symbols.sort_unstable();
        symbols
    }
}
