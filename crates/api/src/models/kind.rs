use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Abstract categorization of a described symbol.
///
/// The display names match the kind strings emitted by the analyzer
/// ("Call signature", "Type literal", ...), which is also the form used
/// when kind chains are printed or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Project,
    Module,
    Namespace,
    Enum,
    EnumMember,
    Variable,
    Function,
    Class,
    Interface,
    Constructor,
    Property,
    Method,
    CallSignature,
    IndexSignature,
    ConstructorSignature,
    Parameter,
    TypeLiteral,
    TypeParameter,
    Accessor,
    GetSignature,
    SetSignature,
    ObjectLiteral,
    TypeAlias,
    Event,
    Reference,
    /// A kind string the model does not know about.
    Custom(String),
    /// The node carried no kind at all.
    Unknown,
}

impl SymbolKind {
    pub fn as_str(&self) -> &str {
        match self {
            SymbolKind::Project => "Project",
            SymbolKind::Module => "Module",
            SymbolKind::Namespace => "Namespace",
            SymbolKind::Enum => "Enumeration",
            SymbolKind::EnumMember => "Enumeration member",
            SymbolKind::Variable => "Variable",
            SymbolKind::Function => "Function",
            SymbolKind::Class => "Class",
            SymbolKind::Interface => "Interface",
            SymbolKind::Constructor => "Constructor",
            SymbolKind::Property => "Property",
            SymbolKind::Method => "Method",
            SymbolKind::CallSignature => "Call signature",
            SymbolKind::IndexSignature => "Index signature",
            SymbolKind::ConstructorSignature => "Constructor signature",
            SymbolKind::Parameter => "Parameter",
            SymbolKind::TypeLiteral => "Type literal",
            SymbolKind::TypeParameter => "Type parameter",
            SymbolKind::Accessor => "Accessor",
            SymbolKind::GetSignature => "Get signature",
            SymbolKind::SetSignature => "Set signature",
            SymbolKind::ObjectLiteral => "Object literal",
            SymbolKind::TypeAlias => "Type alias",
            SymbolKind::Event => "Event",
            SymbolKind::Reference => "Reference",
            SymbolKind::Custom(s) => s,
            SymbolKind::Unknown => "",
        }
    }

    /// Whether this kind can take part in a kind chain.
    pub fn is_known(&self) -> bool {
        !matches!(self, SymbolKind::Unknown)
    }
}

impl From<&str> for SymbolKind {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "" => SymbolKind::Unknown,
            "project" => SymbolKind::Project,
            "module" => SymbolKind::Module,
            "namespace" => SymbolKind::Namespace,
            "enumeration" | "enum" => SymbolKind::Enum,
            "enumeration member" | "enum member" => SymbolKind::EnumMember,
            "variable" => SymbolKind::Variable,
            "function" => SymbolKind::Function,
            "class" => SymbolKind::Class,
            "interface" => SymbolKind::Interface,
            "constructor" => SymbolKind::Constructor,
            "property" => SymbolKind::Property,
            "method" => SymbolKind::Method,
            "call signature" => SymbolKind::CallSignature,
            "index signature" => SymbolKind::IndexSignature,
            "constructor signature" => SymbolKind::ConstructorSignature,
            "parameter" => SymbolKind::Parameter,
            "type literal" => SymbolKind::TypeLiteral,
            "type parameter" => SymbolKind::TypeParameter,
            "accessor" => SymbolKind::Accessor,
            "get signature" => SymbolKind::GetSignature,
            "set signature" => SymbolKind::SetSignature,
            "object literal" => SymbolKind::ObjectLiteral,
            "type alias" => SymbolKind::TypeAlias,
            "event" => SymbolKind::Event,
            "reference" => SymbolKind::Reference,
            _ => SymbolKind::Custom(s.trim().to_string()),
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SymbolKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SymbolKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SymbolKind::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_string_round_trips_through_display_name() {
        for kind in [
            SymbolKind::CallSignature,
            SymbolKind::ConstructorSignature,
            SymbolKind::TypeLiteral,
            SymbolKind::EnumMember,
        ] {
            assert_eq!(SymbolKind::from(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_unrecognized_kind_is_kept_as_custom() {
        assert_eq!(
            SymbolKind::from("Decorator"),
            SymbolKind::Custom("Decorator".to_string())
        );
        assert_eq!(SymbolKind::from(""), SymbolKind::Unknown);
        assert!(!SymbolKind::Unknown.is_known());
    }

    #[test]
    fn test_external_module_keeps_analyzer_name() {
        let kind = SymbolKind::from("External module");
        assert_eq!(kind, SymbolKind::Custom("External module".to_string()));
        assert_ne!(kind, SymbolKind::Module);
        assert_eq!(kind.to_string(), "External module");
    }
}
