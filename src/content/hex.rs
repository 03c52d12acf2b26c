use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::math::parse_hex;

/// A `#RRGGBB` color that keeps its authored spelling for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HexColor {
    type Error = ContentError;

    fn try_from(hex: String) -> Result<Self, Self::Error> {
        match parse_hex(&hex) {
            Some(_) => Ok(Self(hex)),
            None => Err(ContentError::InvalidColor(hex)),
        }
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_color() {
        let c = HexColor::try_from("#228B22".to_string()).unwrap();
        assert_eq!(c.as_str(), "#228B22");
        assert!(HexColor::try_from("#12345".to_string()).is_err());
    }

    #[test]
    fn test_invalid_color() {
        let err = HexColor::try_from("green".to_string()).unwrap_err();
        assert!(matches!(err, ContentError::InvalidColor(s) if s == "green"));
    }

    #[test]
    fn test_yaml_roundtrip_keeps_spelling() {
        let c: HexColor = serde_yaml::from_str("'#654321'").unwrap();
        let out = serde_json::to_string(&c).unwrap();
        assert_eq!(out, "\"#654321\"");
    }
}
