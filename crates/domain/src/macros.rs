//! Macro for implementing Display and FromStr for wire-token enums
//!
//! Several small enums travel as fixed tokens (HTTP methods, event names).
//! This macro provides both conversions from a single variant-to-token table.
//! Parsing is case-insensitive; output always uses the canonical token.
//!
//! # Example
//!
//! ```rust
//! use leema_domain::impl_wire_token_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Verb {
//!     Get,
//!     Post,
//! }
//!
//! impl_wire_token_conversions!(Verb {
//!     Get => "GET",
//!     Post => "POST",
//! });
//!
//! assert_eq!(Verb::Post.to_string(), "POST");
//! assert_eq!("get".parse::<Verb>(), Ok(Verb::Get));
//! ```

/// Implements Display and FromStr traits for token enums
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their canonical tokens
#[macro_export]
macro_rules! impl_wire_token_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical wire token for this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestToken {
        Alpha,
        BetaGamma,
    }

    impl_wire_token_conversions!(TestToken {
        Alpha => "ALPHA",
        BetaGamma => "beta-gamma",
    });

    #[test]
    fn test_display_uses_canonical_token() {
        assert_eq!(TestToken::Alpha.to_string(), "ALPHA");
        assert_eq!(TestToken::BetaGamma.to_string(), "beta-gamma");
    }

    #[test]
    fn test_fromstr_ignores_case() {
        assert_eq!(TestToken::from_str("alpha").unwrap(), TestToken::Alpha);
        assert_eq!(TestToken::from_str("Beta-Gamma").unwrap(), TestToken::BetaGamma);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestToken::from_str("delta");
        assert!(result.unwrap_err().contains("Invalid TestToken: delta"));
        assert!(TestToken::from_str("").is_err());
    }
}
