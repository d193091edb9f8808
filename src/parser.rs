use crate::{
    data_type::DataType,
    operators::{OperatorTable, Operation},
    rpnerr, RpnResult,
};
use lazy_static::lazy_static;
use regex::Regex;

/// Implement this trait to create a matcher for custom literals of operands.
pub trait MatchLiteral {
    /// This method is expected to return `Some(matching_str)` in case of a match of
    /// a literal at the beginning of the input and `None` otherwise.
    fn is_literal(text: &str) -> Option<&str>;
}

/// Default matcher of numeric literals. Besides decimals with optional exponent it
/// accepts `inf`, `-inf`, and `NaN`, i.e., everything `Display` produces for floats.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct NumberMatcher;
impl MatchLiteral for NumberMatcher {
    fn is_literal(text: &str) -> Option<&str> {
        lazy_static! {
            static ref RE_NUMBER: Regex =
                Regex::new(r"^[+-]?(inf|NaN|([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?)")
                    .unwrap();
        }
        RE_NUMBER.find(text).map(|m| m.as_str())
    }
}

/// Helper to implement a struct called `$matcher_name` that implements
/// [`MatchLiteral`](MatchLiteral) and matches the regex pattern `$regex_pattern`.
///
/// For instance, to accept only integral operands when importing a program one can
/// create a struct with name `IntMatcher` via
/// ```rust
/// use rpnex::{literal_matcher_from_pattern, MatchLiteral};
/// literal_matcher_from_pattern!(IntMatcher, "^[0-9]+");
/// assert_eq!(IntMatcher::is_literal("42.5"), Some("42"));
/// ```
#[macro_export]
macro_rules! literal_matcher_from_pattern {
    ($matcher_name:ident, $regex_pattern:expr) => {
        /// Literal matcher type that was created with the macro
        /// [`literal_matcher_from_pattern`](literal_matcher_from_pattern).
        #[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
        pub struct $matcher_name;
        impl $crate::MatchLiteral for $matcher_name {
            fn is_literal(text: &str) -> Option<&str> {
                lazy_static::lazy_static! {
                    static ref RE_LITERAL: regex::Regex =
                        regex::Regex::new($regex_pattern).unwrap();
                }
                RE_LITERAL.find(text).map(|m| m.as_str())
            }
        }
    };
}

pub fn is_variable_name(text: &str) -> bool {
    lazy_static! {
        static ref RE_NAME: Regex = Regex::new(r"^[a-zA-Z_]+[a-zA-Z_0-9]*$").unwrap();
    }
    RE_NAME.is_match(text)
}

/// Resolves one token of a program. Symbols of the operator table take precedence over
/// numeric literals, which take precedence over variable names.
///
/// # Arguments
///
/// * `token` - textual representation of one stack entry, matched exactly
/// * `known_ops` - operator table the token is looked up in
///
/// Returns `None` if the token is neither known, nor a literal that spans the whole token,
/// nor a valid variable name.
pub fn parse_token<T, LM>(token: &str, known_ops: &OperatorTable<T>) -> Option<Operation<T>>
where
    T: DataType,
    LM: MatchLiteral,
{
    if let Some(op) = known_ops.get(token) {
        return Some(op.clone());
    }
    let is_full_literal = LM::is_literal(token).map_or(false, |lit| lit.len() == token.len());
    if is_full_literal {
        if let Ok(x) = token.parse::<T>() {
            return Some(Operation::Operand(x));
        }
    }
    if is_variable_name(token) {
        Some(Operation::Variable(token.to_string()))
    } else {
        None
    }
}

/// Parses a sequence of tokens into stack entries and fails on the first token that
/// cannot be resolved with [`parse_token`](parse_token).
///
/// # Errors
///
/// An [`RpnError`](crate::RpnError) is returned for tokens that are neither known
/// symbols, nor literals, nor variable names.
pub fn parse_program<T, LM, I, S>(
    tokens: I,
    known_ops: &OperatorTable<T>,
) -> RpnResult<Vec<Operation<T>>>
where
    T: DataType,
    LM: MatchLiteral,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ops = vec![];
    for (i, token) in tokens.into_iter().enumerate() {
        let token = token.as_ref();
        match parse_token::<T, LM>(token, known_ops) {
            Some(op) => ops.push(op),
            None => rpnerr!("cannot parse token '{}' at position {}", token, i),
        }
    }
    Ok(ops)
}
