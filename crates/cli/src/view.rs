use docscope_core::audit::{ExclusionTier, KindPattern, Violation};
use docscope_core::config::OptionDeclaration;
use tabled::Tabled;

/// A terminal view of a single violation
#[derive(Tabled)]
pub struct ViolationRow {
    #[tabled(rename = "Kind")]
    pub kind: String,
    #[tabled(rename = "Symbol")]
    pub symbol: String,
    #[tabled(rename = "Defect")]
    pub defect: String,
    #[tabled(rename = "Location")]
    pub location: String,
}

impl ViolationRow {
    pub fn from_violation(v: &Violation) -> Self {
        let location = v
            .location
            .first()
            .map(|l| shorten_location(l))
            .unwrap_or_else(|| "-".to_string());
        Self {
            kind: v.kind.clone(),
            symbol: v.qualified_name.clone(),
            defect: format!("{:?}", v.defect).to_lowercase(),
            location,
        }
    }
}

#[derive(Tabled)]
pub struct KindCountRow {
    #[tabled(rename = "Kind")]
    pub kind: String,
    #[tabled(rename = "Violations")]
    pub count: usize,
}

#[derive(Tabled)]
pub struct ExclusionRow {
    #[tabled(rename = "Tier")]
    pub tier: String,
    #[tabled(rename = "Matcher")]
    pub matcher: String,
    #[tabled(rename = "Kind chain")]
    pub chain: String,
}

impl ExclusionRow {
    pub fn new(tier: ExclusionTier, pattern: &KindPattern) -> Self {
        Self {
            tier: tier.to_string(),
            matcher: pattern.matcher_name().to_string(),
            chain: pattern.chain().to_string(),
        }
    }
}

#[derive(Tabled)]
pub struct OptionRow {
    #[tabled(rename = "Option")]
    pub name: String,
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "Default")]
    pub default: String,
    #[tabled(rename = "Description")]
    pub help: String,
}

impl From<&OptionDeclaration> for OptionRow {
    fn from(decl: &OptionDeclaration) -> Self {
        Self {
            name: format!("--{}", decl.name),
            kind: decl.kind.to_string(),
            default: decl.default.to_string(),
            help: decl.help.to_string(),
        }
    }
}

/// Keep the file name and position of a `path/to/file:line:col` location.
pub fn shorten_location(location: &str) -> String {
    match location.rsplit_once('/') {
        Some((_, tail)) => tail.to_string(),
        None => location.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_location() {
        assert_eq!(shorten_location("src/lib/foo.ts:3:1"), "foo.ts:3:1");
        assert_eq!(shorten_location("foo.ts:3:1"), "foo.ts:3:1");
    }
}
