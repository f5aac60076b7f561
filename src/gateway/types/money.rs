//! Strict monetary input type for the API boundary

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Format-validated decimal amount.
///
/// Accepts a JSON string or a JSON number. String input is checked at the
/// Serde layer:
/// - Rejects `.5` (must be `0.5`)
/// - Rejects `5.` (must be `5.0` or `5`)
/// - Rejects negative amounts
/// - Rejects empty strings
/// - Rejects scientific notation
/// - Rejects a `+` prefix
///
/// Business validation (range, 2-decimal-place precision) happens later in
/// [`crate::validation`].
#[derive(Debug, Clone, Copy)]
pub struct StrictAmount(Decimal);

impl StrictAmount {
    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }
}

impl std::ops::Deref for StrictAmount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for StrictAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum DecimalOrString {
            String(String),
            Number(Decimal),
        }

        let d = match DecimalOrString::deserialize(deserializer)? {
            DecimalOrString::String(s) => {
                if s.is_empty() {
                    return Err(D::Error::custom("Amount cannot be empty"));
                }
                if s.starts_with('.') {
                    return Err(D::Error::custom("Invalid format: use 0.5 not .5"));
                }
                if s.ends_with('.') {
                    return Err(D::Error::custom("Invalid format: use 5.0 not 5."));
                }
                if s.contains('e') || s.contains('E') {
                    return Err(D::Error::custom(
                        "Invalid format: scientific notation not allowed",
                    ));
                }
                if s.starts_with('+') {
                    return Err(D::Error::custom("Invalid format: + prefix not allowed"));
                }
                Decimal::from_str(&s)
                    .map_err(|e| D::Error::custom(format!("Invalid decimal: {}", e)))?
            }
            DecimalOrString::Number(d) => d,
        };

        if d.is_sign_negative() {
            return Err(D::Error::custom("Amount cannot be negative"));
        }

        Ok(StrictAmount(d))
    }
}

impl Serialize for StrictAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as string to preserve precision
        serializer.serialize_str(&self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_string_amount() {
        let d: StrictAmount = serde_json::from_str(r#""100.50""#).unwrap();
        assert_eq!(*d, Decimal::from_str("100.50").unwrap());
    }

    #[test]
    fn test_accepts_json_number() {
        let d: StrictAmount = serde_json::from_str("100.5").unwrap();
        assert_eq!(*d, Decimal::from_str("100.5").unwrap());
    }

    #[test]
    fn test_rejects_dot_prefix() {
        let result: Result<StrictAmount, _> = serde_json::from_str(r#"".5""#);
        assert!(result.unwrap_err().to_string().contains("use 0.5 not .5"));
    }

    #[test]
    fn test_rejects_dot_suffix() {
        let result: Result<StrictAmount, _> = serde_json::from_str(r#""5.""#);
        assert!(result.unwrap_err().to_string().contains("use 5.0 not 5."));
    }

    #[test]
    fn test_rejects_negative() {
        for json in [r#""-1.5""#, "-1.5"] {
            let result: Result<StrictAmount, _> = serde_json::from_str(json);
            assert!(result.is_err(), "negative amount accepted: {}", json);
        }
    }

    #[test]
    fn test_rejects_scientific_notation_string() {
        let result: Result<StrictAmount, _> = serde_json::from_str(r#""1.5e8""#);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("scientific notation")
        );
    }

    #[test]
    fn test_rejects_empty() {
        let result: Result<StrictAmount, _> = serde_json::from_str(r#""""#);
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_serializes_as_string() {
        let d: StrictAmount = serde_json::from_str(r#""123.45""#).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), r#""123.45""#);
    }
}
