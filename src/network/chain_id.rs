use num_bigint::{BigInt, RandBigInt};
use serde::{de::Error, Deserialize, Deserializer};
use serde_json::Value;

/// Bit length of the chain ids picked when the init file has none.
pub const RANDOM_BITS: u64 = 100;

///
/// A random, strictly positive chain id of at most [RANDOM_BITS] bits.
///
/// Uniqueness is only likely, there is no registry to check against.
///
pub fn random() -> BigInt {
    let mut rng = rand::thread_rng();

    loop {
        let id = rng.gen_biguint(RANDOM_BITS);
        if id.bits() > 0 {
            return id.into();
        }
    }
}

///
/// Parses a decimal or `0x` prefixed hexadecimal chain id.
///
pub fn parse(text: &str) -> Option<BigInt> {
    let text = text.trim();

    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => BigInt::parse_bytes(hex.as_bytes(), 16),
        None => text.parse().ok(),
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<BigInt>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(None),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s,
        other => return Err(D::Error::custom(format!("chain id must be an integer, got {}", other))),
    };

    parse(&text)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("invalid chain id `{}`", text)))
}
