//! Token type selector for the mobile app's transfer code path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Which USDC transfer path the Yatori app takes for a request.
///
/// `UsdcCreate` also initializes the recipient's token account, so it is
/// the safe choice whenever activation status is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenType {
    /// Plain transfer to an already-initialized token account.
    UsdcBasic,
    /// Transfer that creates the recipient's token account first.
    UsdcCreate,
}

impl TokenType {
    /// Pick the token type for a recipient's activation state.
    pub fn for_activation(is_activated: bool) -> Self {
        if is_activated {
            Self::UsdcBasic
        } else {
            Self::UsdcCreate
        }
    }

    /// Return the wire name used in the `token` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UsdcBasic => "usdcBasic",
            Self::UsdcCreate => "usdcCreate",
        }
    }
}

impl Default for TokenType {
    fn default() -> Self {
        Self::UsdcBasic
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TokenType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "usdcbasic" => Ok(Self::UsdcBasic),
            "usdccreate" => Ok(Self::UsdcCreate),
            _ => Err(AppError::validation(format!(
                "Invalid token type: '{s}'. Expected one of: usdcBasic, usdcCreate"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_activation() {
        assert_eq!(TokenType::for_activation(true), TokenType::UsdcBasic);
        assert_eq!(TokenType::for_activation(false), TokenType::UsdcCreate);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("usdcBasic".parse::<TokenType>().unwrap(), TokenType::UsdcBasic);
        assert_eq!("USDCCREATE".parse::<TokenType>().unwrap(), TokenType::UsdcCreate);
        assert!("usdt".parse::<TokenType>().is_err());
    }

    #[test]
    fn test_serde_wire_name() {
        let json = serde_json::to_string(&TokenType::UsdcCreate).expect("serialize");
        assert_eq!(json, "\"usdcCreate\"");
    }
}
