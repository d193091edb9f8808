use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// This will be thrown at you if something within Rpnex went wrong. The engine itself
/// never fails, only the strict parsing and deserialization entry points do.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct RpnError {
    pub msg: String,
}
impl RpnError {
    pub fn new(msg: &str) -> RpnError {
        RpnError {
            msg: msg.to_string(),
        }
    }
}
impl Display for RpnError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}
impl Error for RpnError {}

/// Rpnex' result type with [`RpnError`](RpnError) as error type.
pub type RpnResult<U> = Result<U, RpnError>;

/// Creates an [`RpnError`](RpnError) with a formatted message.
/// ```rust
/// # use std::error::Error;
/// use rpnex::{format_rpnerr, RpnError};
/// # fn main() -> Result<(), Box<dyn Error>> {
/// assert_eq!(format_rpnerr!("some error {}", 1), RpnError::new("some error 1"));
/// #     Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! format_rpnerr {
    ($s:literal, $( $exps:expr ),*) => {
        $crate::RpnError::new(format!($s, $($exps,)*).as_str())
    }
}

/// Returns early with an [`RpnError`](RpnError) that carries a formatted message.
/// ```rust
/// # use std::error::Error;
/// use rpnex::{rpnerr, RpnResult};
/// fn check(n_tokens: usize) -> RpnResult<()> {
///     if n_tokens == 0 {
///         rpnerr!("need at least {} token", 1);
///     }
///     Ok(())
/// }
/// # fn main() -> Result<(), Box<dyn Error>> {
/// assert!(check(0).is_err());
/// assert!(check(1).is_ok());
/// #     Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! rpnerr {
    ($s:literal, $( $exps:expr ),*) => {
        return Err($crate::format_rpnerr!($s, $($exps),*))
    };
    ($s:literal) => {
        return Err($crate::RpnError::new($s))
    };
}
