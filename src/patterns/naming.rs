//! Identifier casing classification.

use crate::common::is_all_lowercase;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surface casing convention of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NamingStyle {
    SnakeCase,
    CamelCase,
    PascalCase,
    Other,
}

impl NamingStyle {
    /// Classify an identifier. Rules are tried in order:
    ///
    /// 1. contains `_` and is fully lowercase -> `SnakeCase`
    /// 2. lowercase first char and any later uppercase char -> `CamelCase`
    /// 3. uppercase first char -> `PascalCase`
    /// 4. otherwise `Other`
    ///
    /// A bare lowercase word such as `x` or `user` has no underscore and no
    /// hump, so it is `Other`.
    pub fn classify(name: &str) -> Self {
        if name.contains('_') && is_all_lowercase(name) {
            return Self::SnakeCase;
        }
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_lowercase() && chars.any(char::is_uppercase) => {
                Self::CamelCase
            }
            Some(first) if first.is_uppercase() => Self::PascalCase,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SnakeCase => "snake_case",
            Self::CamelCase => "camelCase",
            Self::PascalCase => "PascalCase",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_examples() {
        assert_eq!(NamingStyle::classify("get_user"), NamingStyle::SnakeCase);
        assert_eq!(NamingStyle::classify("getUser"), NamingStyle::CamelCase);
        assert_eq!(NamingStyle::classify("GetUser"), NamingStyle::PascalCase);
    }

    #[test]
    fn test_single_lowercase_letter_is_other() {
        assert_eq!(NamingStyle::classify("x"), NamingStyle::Other);
        assert_eq!(NamingStyle::classify("user"), NamingStyle::Other);
    }

    #[test]
    fn test_rule_order() {
        // Uppercase after an underscore fails rule 1 and lands on camelCase.
        assert_eq!(NamingStyle::classify("get_User"), NamingStyle::CamelCase);
        // Screaming snake starts uppercase.
        assert_eq!(NamingStyle::classify("MAX_SIZE"), NamingStyle::PascalCase);
        // Leading underscore is not lowercase.
        assert_eq!(NamingStyle::classify("_private"), NamingStyle::SnakeCase);
        assert_eq!(NamingStyle::classify("_Private"), NamingStyle::Other);
        assert_eq!(NamingStyle::classify("__"), NamingStyle::Other);
    }

    #[test]
    fn test_empty_identifier_is_other() {
        assert_eq!(NamingStyle::classify(""), NamingStyle::Other);
    }
}
