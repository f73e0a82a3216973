//! Typed identifier newtypes backed by the host controller's numeric ids.
//!
//! The host addresses sensor-bus variables and macros by small integers; the
//! newtypes keep the two id spaces from being mixed up.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Wrap a raw host identifier.
            #[must_use]
            pub fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Access the raw host identifier.
            #[must_use]
            pub fn as_u32(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a numeric variable on the host's sensor bus.
    SysvarId
);

define_id!(
    /// Identifier of a host-defined macro (automation routine).
    MacroId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = SysvarId::new(1042);
        let text = id.to_string();
        let parsed: SysvarId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_parse_surrounding_whitespace() {
        let parsed: MacroId = "  17 ".parse().unwrap();
        assert_eq!(parsed, MacroId::new(17));
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_text() {
        let result = SysvarId::from_str("kitchen");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_error_when_parsing_empty_string() {
        let result = MacroId::from_str("");
        assert!(result.is_err());
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let id = MacroId::new(3);
        let json = serde_json::to_string(&id).unwrap();
        let parsed: MacroId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
