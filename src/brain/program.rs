use super::RpnBrain;
use crate::{
    data_type::DataType,
    operators::MakeOperators,
    parser::{self, MatchLiteral},
    RpnError, RpnResult,
};
use log::debug;
use std::str::FromStr;

impl<T, OF, LM> RpnBrain<T, OF, LM>
where
    T: DataType,
    OF: MakeOperators<T>,
    LM: MatchLiteral,
{
    /// Returns the symbols of all stack entries from bottom to top. Operands are formatted
    /// with `Display` which is independent of the locale and round-trips for floats.
    pub fn export_program(&self) -> Vec<String> {
        self.stack.iter().map(|op| op.symbol()).collect()
    }

    /// Replaces the stack by the entries the tokens stand for. Tokens are resolved as
    /// described in [`parse_token`](crate::parse_token). Tokens that cannot be resolved
    /// are skipped. Variable values are kept.
    ///
    /// ```rust
    /// use rpnex::RpnBrain;
    ///
    /// let mut brain = RpnBrain::<f64>::new();
    /// brain.import_program(["4", "2", "#", "÷"]);
    /// assert_eq!(brain.export_program(), vec!["4", "2", "÷"]);
    /// assert_eq!(brain.evaluate().result, Some(2.0));
    /// ```
    pub fn import_program<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stack.clear();
        for token in tokens {
            let token = token.as_ref();
            match parser::parse_token::<T, LM>(token, &self.known_ops) {
                Some(op) => self.stack.push(op),
                None => debug!("skipping token '{}' of imported program", token),
            }
        }
    }
}

/// Parses a whitespace separated program. In contrast to
/// [`import_program`](RpnBrain::import_program), unknown tokens are errors.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use rpnex::RpnBrain;
/// use std::str::FromStr;
///
/// let brain = RpnBrain::<f64>::from_str("1 x + 3 ×")?;
/// assert_eq!(brain.render(), "(1+x)×3");
/// assert!(RpnBrain::<f64>::from_str("1 x $ 3 ×").is_err());
/// #
/// #     Ok(())
/// # }
/// ```
impl<T, OF, LM> FromStr for RpnBrain<T, OF, LM>
where
    T: DataType,
    OF: MakeOperators<T>,
    LM: MatchLiteral,
{
    type Err = RpnError;

    fn from_str(text: &str) -> RpnResult<Self> {
        let mut brain = Self::new();
        let tokens = text.split_whitespace();
        brain.stack = parser::parse_program::<T, LM, _, _>(tokens, &brain.known_ops)?;
        Ok(brain)
    }
}
