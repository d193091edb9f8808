use num::{traits::FloatConst, Float};
use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

/// Gathers [`Float`](num::Float), [`FloatConst`](num::traits::FloatConst), `FromStr`,
/// `Display`, and `Debug` in one trait. Every type that is pushed onto the stack of an
/// [`RpnBrain`](crate::RpnBrain) needs to implement at least this. `Display` is used to
/// export operands and `FromStr` to import them again, so both should round-trip.
pub trait DataType: Float + FloatConst + FromStr + Display + Debug {}
impl<T: Float + FloatConst + FromStr + Display + Debug> DataType for T {}
