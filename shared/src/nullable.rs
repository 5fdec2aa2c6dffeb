//! Nullable field decoding
//!
//! The backend serializes optional columns as `sql.Null*` structs, so an
//! optional scalar arrives as `{"String": "Italian", "Valid": true}` or
//! `{"Int32": 40, "Valid": true}`. Some handlers flatten the same field to a
//! bare scalar, and others emit `null`. All of these decode into `Option<T>`
//! here so nothing past the model layer ever sees the wrapper.
//!
//! Use on a field with:
//!
//! ```ignore
//! #[serde(default, deserialize_with = "crate::nullable::deserialize")]
//! pub cuisine_type: Option<String>,
//! ```

use serde::{Deserialize, Deserializer};

/// Values that count as absent even when the wrapper says `Valid`.
pub trait Blank {
    fn is_blank(&self) -> bool {
        false
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for i32 {}
impl Blank for i64 {}
impl Blank for f64 {}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr<T> {
    Bare(T),
    Wrapped {
        #[serde(
            rename = "String",
            alias = "Int32",
            alias = "Int64",
            alias = "Float64"
        )]
        value: Option<T>,
        #[serde(rename = "Valid", default)]
        valid: bool,
    },
}

/// Decode a wrapper, a bare scalar or `null` into `Option<T>`.
///
/// An invalid wrapper and a blank string both decode to `None`.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Blank,
{
    let value = match Option::<Repr<T>>::deserialize(deserializer)? {
        None => None,
        Some(Repr::Bare(value)) => Some(value),
        Some(Repr::Wrapped { value, valid }) => value.filter(|_| valid),
    };
    Ok(value.filter(|v| !v.is_blank()))
}

/// Decode a list that the backend may send as `null` (an empty Go slice).
pub fn deserialize_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Wrapped {
        #[serde(default, deserialize_with = "super::deserialize")]
        text: Option<String>,
        #[serde(default, deserialize_with = "super::deserialize")]
        minutes: Option<i32>,
    }

    fn decode(json: &str) -> Wrapped {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_wrapped_values() {
        let p = decode(r#"{"text": {"String": "Italian", "Valid": true}, "minutes": {"Int32": 40, "Valid": true}}"#);
        assert_eq!(p.text.as_deref(), Some("Italian"));
        assert_eq!(p.minutes, Some(40));
    }

    #[test]
    fn test_invalid_wrapper_is_none() {
        let p = decode(r#"{"text": {"String": "", "Valid": false}, "minutes": {"Int32": 0, "Valid": false}}"#);
        assert!(p.text.is_none());
        assert!(p.minutes.is_none());
    }

    #[test]
    fn test_bare_scalars() {
        let p = decode(r#"{"text": "Georgian", "minutes": 25}"#);
        assert_eq!(p.text.as_deref(), Some("Georgian"));
        assert_eq!(p.minutes, Some(25));
    }

    #[test]
    fn test_null_and_missing() {
        let p = decode(r#"{"text": null}"#);
        assert!(p.text.is_none());
        assert!(p.minutes.is_none());
    }

    #[derive(Debug, Deserialize)]
    struct WrappedList {
        #[serde(default, deserialize_with = "super::deserialize_vec")]
        items: Vec<i32>,
    }

    #[test]
    fn test_null_list_is_empty() {
        let p: WrappedList = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(p.items.is_empty());
        let p: WrappedList = serde_json::from_str(r#"{"items": [1, 2]}"#).unwrap();
        assert_eq!(p.items, vec![1, 2]);
    }

    #[test]
    fn test_blank_string_is_none() {
        let p = decode(r#"{"text": "   ", "minutes": null}"#);
        assert!(p.text.is_none());
    }
}
