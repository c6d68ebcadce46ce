use crate::model::{Comment, SymbolKind, Visibility};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const LINE_PREFIX: &str = "(missing-check)";

const MODULE_HINT: &str =
    " You may need to add a @module tag. http://typedoc.org/guides/doccomments/#files";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocDefect {
    /// No documentation comment at all.
    Missing,
    /// A comment exists but both its short and long text are empty.
    Empty,
}

impl DocDefect {
    /// Classify a comment; `None` means the documentation is acceptable.
    pub fn of(comment: Option<&Comment>) -> Option<Self> {
        match comment {
            None => Some(DocDefect::Missing),
            Some(c) if c.is_empty() => Some(DocDefect::Empty),
            Some(_) => None,
        }
    }

    pub fn reason(&self, kind: &SymbolKind, name: &str) -> String {
        match self {
            DocDefect::Missing => {
                let mut reason = format!(
                    "Documentation comment missing for {} named '{}'.",
                    kind, name
                );
                if *kind == SymbolKind::Module {
                    reason.push_str(MODULE_HINT);
                }
                reason
            }
            DocDefect::Empty => format!("Documentation comment empty for {} named {}", kind, name),
        }
    }
}

/// A checked symbol whose documentation is missing or empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub kind: String,
    pub kind_chain: String,
    pub name: String,
    pub qualified_name: String,
    pub visibility: Visibility,
    pub defect: DocDefect,
    /// `file:line:col` entries of the symbol, or of its parent when it has none.
    pub location: Vec<String>,
    pub reason: String,
    pub comment: Option<Comment>,
}

impl Violation {
    /// Extend the reason with a pretty-printed dump of the whole record.
    pub fn expand_reason(&mut self) {
        if let Ok(dump) = serde_json::to_string_pretty(&*self) {
            self.reason.push_str(&dump);
        }
    }

    /// Single report line: `(missing-check) <location> <reason> <comment>`.
    pub fn format_line(&self) -> String {
        let comment = serde_json::to_string(&self.comment).unwrap_or_else(|_| "null".to_string());
        if self.location.is_empty() {
            format!("{} {} {}", LINE_PREFIX, self.reason, comment)
        } else {
            format!(
                "{} {} {} {}",
                LINE_PREFIX,
                self.location.join(","),
                self.reason,
                comment
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Violation {
        Violation {
            kind: "Class".to_string(),
            kind_chain: "Module::Class".to_string(),
            name: "Bar".to_string(),
            qualified_name: "foo::Bar".to_string(),
            visibility: Visibility::Public,
            defect: DocDefect::Missing,
            location: vec!["src/foo.ts:3:0".to_string()],
            reason: DocDefect::Missing.reason(&SymbolKind::Class, "Bar"),
            comment: None,
        }
    }

    #[test]
    fn test_defect_classification() {
        assert_eq!(DocDefect::of(None), Some(DocDefect::Missing));
        assert_eq!(DocDefect::of(Some(&Comment::new("", ""))), Some(DocDefect::Empty));
        assert_eq!(DocDefect::of(Some(&Comment::new("", "long"))), None);
        assert_eq!(DocDefect::of(Some(&Comment::new("short", ""))), None);
    }

    #[test]
    fn test_module_hint_only_for_modules() {
        let module = DocDefect::Missing.reason(&SymbolKind::Module, "foo");
        assert!(module.ends_with("http://typedoc.org/guides/doccomments/#files"));
        assert!(module.contains("@module tag"));

        let class = DocDefect::Missing.reason(&SymbolKind::Class, "Bar");
        assert_eq!(class, "Documentation comment missing for Class named 'Bar'.");
    }

    #[test]
    fn test_empty_reason_text() {
        assert_eq!(
            DocDefect::Empty.reason(&SymbolKind::Method, "baz"),
            "Documentation comment empty for Method named baz"
        );
    }

    #[test]
    fn test_format_line() {
        let v = sample();
        assert_eq!(
            v.format_line(),
            "(missing-check) src/foo.ts:3:0 Documentation comment missing for Class named 'Bar'. null"
        );

        let mut no_location = sample();
        no_location.location.clear();
        no_location.comment = Some(Comment::new("", ""));
        assert_eq!(
            no_location.format_line(),
            "(missing-check) Documentation comment missing for Class named 'Bar'. {\"shortText\":\"\",\"text\":\"\"}"
        );
    }

    #[test]
    fn test_expand_reason_appends_record_dump() {
        let mut v = sample();
        v.expand_reason();
        assert!(v.reason.starts_with("Documentation comment missing for Class named 'Bar'.{"));
        assert!(v.reason.contains("\"qualifiedName\": \"foo::Bar\""));
    }
}
