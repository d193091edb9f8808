use std::{fmt, marker::PhantomData};

use serde::{
    de::{self, SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{data_type::DataType, parser, MakeOperators, MatchLiteral, RpnBrain};

impl<T, OF, LM> Serialize for RpnBrain<T, OF, LM>
where
    T: DataType,
    OF: MakeOperators<T>,
    LM: MatchLiteral,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.export_program())
    }
}

impl<'de, T, OF, LM> Deserialize<'de> for RpnBrain<T, OF, LM>
where
    T: DataType,
    OF: MakeOperators<T>,
    LM: MatchLiteral,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(RpnBrainVisitor {
            brain_dummy: PhantomData,
        })
    }
}

struct RpnBrainVisitor<T, OF, LM> {
    brain_dummy: PhantomData<RpnBrain<T, OF, LM>>,
}

impl<'de, T, OF, LM> Visitor<'de> for RpnBrainVisitor<T, OF, LM>
where
    T: DataType,
    OF: MakeOperators<T>,
    LM: MatchLiteral,
{
    type Value = RpnBrain<T, OF, LM>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence of operand and operation symbols")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut tokens = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(token) = seq.next_element::<String>()? {
            tokens.push(token);
        }
        let mut brain = Self::Value::new();
        brain.stack = parser::parse_program::<T, LM, _, _>(tokens, &brain.known_ops)
            .map_err(|e| <A::Error as de::Error>::custom(format!("Parse error - {}", e.msg)))?;
        Ok(brain)
    }
}

#[cfg(test)]
use serde_test::Token;

#[test]
fn test_ser_de() {
    let mut brain = RpnBrain::<f64>::new();
    brain.push_operand(4.0);
    brain.push_operand(0.5);
    brain.perform_operation("÷");
    brain.push_variable("y");
    brain.perform_operation("+");
    serde_test::assert_ser_tokens(
        &brain,
        &[
            Token::Seq { len: Some(5) },
            Token::Str("4"),
            Token::Str("0.5"),
            Token::Str("÷"),
            Token::Str("y"),
            Token::Str("+"),
            Token::SeqEnd,
        ],
    );

    let serialized = serde_json::to_string(&brain).unwrap();
    assert_eq!(serialized, r#"["4","0.5","÷","y","+"]"#);
    let mut deserialized = serde_json::from_str::<RpnBrain<f64>>(serialized.as_str()).unwrap();
    assert_eq!(deserialized.render(), brain.render());
    deserialized.set_variable("y", 1.0);
    assert_eq!(deserialized.evaluate().result, Some(9.0));
}

#[test]
fn test_de_error() {
    let parsed = serde_json::from_str::<RpnBrain<f64>>(r#"["1","2","pow"]"#);
    assert!(parsed.is_ok());
    let err = serde_json::from_str::<RpnBrain<f64>>(r#"["1","2","**"]"#).unwrap_err();
    assert!(err
        .to_string()
        .starts_with("Parse error - cannot parse token '**' at position 2"));
    assert!(serde_json::from_str::<RpnBrain<f64>>(r#""1 2 +""#).is_err());
}
