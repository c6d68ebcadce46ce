use crate::audit::{ExclusionTable, KindChain, KindPattern};
use crate::error::{DocscopeError, Result};
use crate::model::ScopeLevel;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DISABLED_OPTION: &str = "missing-check-disabled";
pub const LEVEL_OPTION: &str = "missing-check-level";
pub const VERBOSE_OPTION: &str = "missing-check-verbose";
pub const IGNORE_OPTION: &str = "missing-check-ignore";

/// A documented option, as shown by `docscope options`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDeclaration {
    pub name: &'static str,
    pub kind: &'static str,
    pub default: &'static str,
    pub help: &'static str,
}

pub const OPTION_DECLARATIONS: &[OptionDeclaration] = &[
    OptionDeclaration {
        name: DISABLED_OPTION,
        kind: "boolean",
        default: "false",
        help: "Option to disable missing check",
    },
    OptionDeclaration {
        name: VERBOSE_OPTION,
        kind: "boolean",
        default: "false",
        help: "Option to enable more verbose error messages.",
    },
    OptionDeclaration {
        name: LEVEL_OPTION,
        kind: "string",
        default: "public",
        help: "Visibility level to validate. Can have values [\"public\",\"protected\",\"private\"]",
    },
    OptionDeclaration {
        name: IGNORE_OPTION,
        kind: "string[]",
        default: "[]",
        help: "Extra kind chains to skip, e.g. \"Module::Variable\"",
    },
];

/// Options of the missing check, read from a host options file.
///
/// Keys keep their host names; unrelated keys in the same file are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MissingCheckOptions {
    #[serde(rename = "missing-check-disabled")]
    pub disabled: bool,
    #[serde(rename = "missing-check-level")]
    pub level: String,
    #[serde(rename = "missing-check-verbose")]
    pub verbose: bool,
    #[serde(rename = "missing-check-ignore")]
    pub ignore: Vec<String>,
}

impl Default for MissingCheckOptions {
    fn default() -> Self {
        Self {
            disabled: false,
            level: ScopeLevel::Public.as_str().to_string(),
            verbose: false,
            ignore: Vec::new(),
        }
    }
}

impl MissingCheckOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(DocscopeError::Config(
                "options file must contain a JSON object".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parsed scope level, `None` when the configured string is not a known level.
    pub fn scope(&self) -> Option<ScopeLevel> {
        self.level.parse().ok()
    }

    /// Built-in exclusions plus the configured extra chains.
    pub fn exclusion_table(&self) -> Result<ExclusionTable> {
        let extra = self
            .ignore
            .iter()
            .map(|chain| chain.parse::<KindChain>().map(KindPattern::Exact))
            .collect::<Result<Vec<_>>>()?;
        Ok(ExclusionTable::builtin().with_ignored(extra))
    }
}
