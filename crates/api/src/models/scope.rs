use super::symbol::Visibility;
use crate::error::ApiError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visibility threshold deciding which symbols are audited.
///
/// Levels are nested: everything `Public` checks is also checked by
/// `Protected`, and everything `Protected` checks is also checked by `Private`.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ScopeLevel {
    #[default]
    Public,
    Protected,
    Private,
}

impl ScopeLevel {
    pub const ALL: [ScopeLevel; 3] = [ScopeLevel::Public, ScopeLevel::Protected, ScopeLevel::Private];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeLevel::Public => "public",
            ScopeLevel::Protected => "protected",
            ScopeLevel::Private => "private",
        }
    }

    /// Whether a symbol with the given effective visibility falls inside this scope.
    pub fn includes(&self, visibility: Visibility) -> bool {
        match self {
            ScopeLevel::Public => visibility == Visibility::Public,
            ScopeLevel::Protected => visibility != Visibility::Private,
            ScopeLevel::Private => true,
        }
    }
}

impl FromStr for ScopeLevel {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(ScopeLevel::Public),
            "protected" => Ok(ScopeLevel::Protected),
            "private" => Ok(ScopeLevel::Private),
            other => Err(ApiError::UnknownScope(other.to_string())),
        }
    }
}

impl fmt::Display for ScopeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_table() {
        use crate::models::symbol::Visibility::*;
        assert!(ScopeLevel::Public.includes(Public));
        assert!(!ScopeLevel::Public.includes(Protected));
        assert!(!ScopeLevel::Public.includes(Private));

        assert!(ScopeLevel::Protected.includes(Public));
        assert!(ScopeLevel::Protected.includes(Protected));
        assert!(!ScopeLevel::Protected.includes(Private));

        assert!(ScopeLevel::Private.includes(Public));
        assert!(ScopeLevel::Private.includes(Protected));
        assert!(ScopeLevel::Private.includes(Private));
    }

    #[test]
    fn test_scope_levels_are_nested() {
        for vis in [Visibility::Public, Visibility::Protected, Visibility::Private] {
            if ScopeLevel::Public.includes(vis) {
                assert!(ScopeLevel::Protected.includes(vis));
            }
            if ScopeLevel::Protected.includes(vis) {
                assert!(ScopeLevel::Private.includes(vis));
            }
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!("protected".parse::<ScopeLevel>().unwrap(), ScopeLevel::Protected);
        assert!("Public".parse::<ScopeLevel>().is_err());
        assert!(matches!(
            "internal".parse::<ScopeLevel>(),
            Err(ApiError::UnknownScope(level)) if level == "internal"
        ));
    }
}
