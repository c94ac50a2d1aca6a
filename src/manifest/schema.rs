//! Manifest field schema definitions

use crate::assert::ValueType;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Letters, digits and underscores, with spaces allowed only inside
const NAME_BODY: &str = r"[A-Za-z0-9_](?:[A-Za-z0-9_ ]*[A-Za-z0-9_])?";

/// MAJOR.MINOR.PATCH; the separator is an unescaped wildcard, so `1x2x3`
/// also matches
const VERSION_BODY: &str = r"[0-9]+.[0-9]+.[0-9]+";

/// Team namespace, no leading or trailing underscore
const NAMESPACE_BODY: &str = r"[A-Za-z0-9](?:[A-Za-z0-9_]*[A-Za-z0-9])?";

const WEBSITE_URL_PATTERN: &str =
    r"^https?://(?:www\.)?[-A-Za-z0-9@:%._+~#=]{1,256}\.[A-Za-z0-9]{2,}\b[-A-Za-z0-9()@:%_+.~#?&/=]*$";

/// Named, anchored patterns used by manifest fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Name,
    Version,
    Dependency,
    WebsiteUrl,
}

static NAME: LazyLock<Regex> = LazyLock::new(|| anchored(NAME_BODY));
static VERSION: LazyLock<Regex> = LazyLock::new(|| anchored(VERSION_BODY));
static DEPENDENCY: LazyLock<Regex> = LazyLock::new(|| {
    anchored(&format!("{}-{}-{}", NAMESPACE_BODY, NAME_BODY, VERSION_BODY))
});
static WEBSITE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(WEBSITE_URL_PATTERN).expect("Failed to compile website URL pattern")
});

impl Pattern {
    pub fn regex(&self) -> &'static Regex {
        match self {
            Pattern::Name => &NAME,
            Pattern::Version => &VERSION,
            Pattern::Dependency => &DEPENDENCY,
            Pattern::WebsiteUrl => &WEBSITE_URL,
        }
    }
}

fn anchored(body: &str) -> Regex {
    Regex::new(&format!("^{}$", body)).expect("Failed to compile manifest field pattern")
}

/// Rules applied to each element of an array field
#[derive(Debug, Clone, Copy)]
pub struct ItemSpec {
    pub value_type: ValueType,
    pub pattern: Option<Pattern>,
}

/// Declarative rules for one manifest field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub value_type: ValueType,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub pattern: Option<Pattern>,
    /// When false an empty string skips the pattern
    pub pattern_applies_to_empty: bool,
    pub items: Option<ItemSpec>,
}

impl FieldSpec {
    const fn text(name: &'static str, min_len: usize, max_len: usize) -> Self {
        Self {
            name,
            value_type: ValueType::String,
            min_len: Some(min_len),
            max_len: Some(max_len),
            pattern: None,
            pattern_applies_to_empty: true,
            items: None,
        }
    }

    const fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    const fn pattern_optional_when_empty(mut self) -> Self {
        self.pattern_applies_to_empty = false;
        self
    }

    const fn list(name: &'static str, items: ItemSpec) -> Self {
        Self {
            name,
            value_type: ValueType::Array,
            min_len: None,
            max_len: None,
            pattern: None,
            pattern_applies_to_empty: true,
            items: Some(items),
        }
    }
}

/// Manifest fields in the order they are checked
pub const MANIFEST_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", 1, 128).with_pattern(Pattern::Name),
    FieldSpec::text("description", 0, 250),
    FieldSpec::text("version_number", 5, 16).with_pattern(Pattern::Version),
    FieldSpec::list(
        "dependencies",
        ItemSpec {
            value_type: ValueType::String,
            pattern: Some(Pattern::Dependency),
        },
    ),
    FieldSpec::text("website_url", 0, 1024)
        .with_pattern(Pattern::WebsiteUrl)
        .pattern_optional_when_empty(),
];

/// Typed manifest, read once the document is known to be valid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub description: String,
    pub version_number: String,
    pub dependencies: Vec<String>,
    pub website_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn field_order_is_fixed() {
        let names: Vec<_> = MANIFEST_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            ["name", "description", "version_number", "dependencies", "website_url"]
        );
    }

    #[rstest]
    #[case("Better_Lanterns", true)]
    #[case("Better Lanterns", true)]
    #[case("a", true)]
    #[case("_", true)]
    #[case(" leading", false)]
    #[case("trailing ", false)]
    #[case("dash-name", false)]
    #[case("dotted.name", false)]
    #[case("émoji", false)]
    fn name_pattern(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(Pattern::Name.regex().is_match(value), ok);
    }

    #[rstest]
    #[case("1.0.0", true)]
    #[case("10.20.300", true)]
    #[case("1x2x3", true)]
    #[case("1.0", false)]
    #[case("v1.0.0", false)]
    #[case("1.0.0-beta", false)]
    #[case("a.b.c", false)]
    fn version_pattern_keeps_wildcard_separator(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(Pattern::Version.regex().is_match(value), ok);
    }

    #[rstest]
    #[case("BepInEx-BepInExPack-5.4.2100", true)]
    #[case("Team_1-Some Mod-1.0.0", true)]
    #[case("badformat", false)]
    #[case("_Team-Mod-1.0.0", false)]
    #[case("Team_-Mod-1.0.0", false)]
    #[case("Team-Mod", false)]
    #[case("Team-Mod-1.0", false)]
    fn dependency_pattern(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(Pattern::Dependency.regex().is_match(value), ok);
    }

    #[rstest]
    #[case("https://example.com", true)]
    #[case("http://www.example.co.uk/path?q=1", true)]
    #[case("https://github.com/team/mod", true)]
    #[case("not a url", false)]
    #[case("ftp://example.com", false)]
    #[case("https://localhost", false)]
    #[case("https://example.c", false)]
    fn website_url_pattern(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(Pattern::WebsiteUrl.regex().is_match(value), ok);
    }
}
