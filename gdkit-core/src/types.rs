//! Domain types for a GDExtension project identity.
//!
//! A [`ProjectName`] doubles as a directory name, a file-name fragment and a
//! substring of `res://` paths inside quoted descriptor fields, so it is
//! validated once at the boundary and trusted everywhere after.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::IdentityError;

/// Entry symbol used when the properties file does not name one.
pub const DEFAULT_ENTRY_SYMBOL: &str = "default_entry_symbol";

/// Characters that are rejected in project names on every supported platform.
const FORBIDDEN_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// The project name: directory name, descriptor file stem and library prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate `raw` as a project name.
    pub fn parse(raw: impl Into<String>) -> Result<Self, IdentityError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(IdentityError::EmptyName);
        }
        if raw == "." || raw == ".." {
            return Err(IdentityError::ReservedName { name: raw });
        }
        if raw.trim() != raw {
            return Err(IdentityError::SurroundingWhitespace { name: raw });
        }
        if let Some(ch) = raw
            .chars()
            .find(|c| c.is_control() || FORBIDDEN_NAME_CHARS.contains(c))
        {
            return Err(IdentityError::InvalidNameChar { name: raw, ch });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unchecked; for literals known to be valid.
impl From<&str> for ProjectName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl TryFrom<String> for ProjectName {
    type Error = IdentityError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}

/// Name of the extension's exported initialization function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntrySymbol(String);

impl EntrySymbol {
    /// Validate `raw` as an entry symbol. It ends up inside a quoted
    /// descriptor field, so quotes and whitespace are rejected.
    pub fn parse(raw: impl Into<String>) -> Result<Self, IdentityError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(IdentityError::EmptyEntrySymbol);
        }
        if let Some(ch) = raw
            .chars()
            .find(|c| c.is_control() || c.is_whitespace() || *c == '"')
        {
            return Err(IdentityError::InvalidEntrySymbolChar { symbol: raw, ch });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntrySymbol {
    fn default() -> Self {
        Self(DEFAULT_ENTRY_SYMBOL.to_owned())
    }
}

impl fmt::Display for EntrySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unchecked; for literals known to be valid.
impl From<&str> for EntrySymbol {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl TryFrom<String> for EntrySymbol {
    type Error = IdentityError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl From<EntrySymbol> for String {
    fn from(symbol: EntrySymbol) -> Self {
        symbol.0
    }
}

// ---------------------------------------------------------------------------
// ProjectIdentity
// ---------------------------------------------------------------------------

/// Name and entry symbol of the project, threaded through every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectIdentity {
    pub name: ProjectName,
    pub entry_symbol: EntrySymbol,
}

impl ProjectIdentity {
    pub fn new(name: ProjectName, entry_symbol: EntrySymbol) -> Self {
        Self { name, entry_symbol }
    }

    /// Same entry symbol under a different name.
    pub fn renamed(&self, name: ProjectName) -> Self {
        Self {
            name,
            entry_symbol: self.entry_symbol.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("demo")]
    #[case("my-game_2")]
    #[case("Space Shooter")]
    #[case("プロジェクト")]
    fn accepts_valid_names(#[case] raw: &str) {
        assert_eq!(ProjectName::parse(raw).unwrap().as_str(), raw);
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    #[case("..")]
    #[case("a/b")]
    #[case("a\\b")]
    #[case("say \"hi\"")]
    #[case("tab\there")]
    #[case(" padded")]
    #[case("what?")]
    fn rejects_invalid_names(#[case] raw: &str) {
        assert!(ProjectName::parse(raw).is_err(), "{raw:?} should be rejected");
    }

    #[test]
    fn invalid_char_is_reported() {
        let err = ProjectName::parse("a|b").unwrap_err();
        assert!(matches!(err, IdentityError::InvalidNameChar { ch: '|', .. }));
    }

    #[rstest]
    #[case("example_library_init")]
    #[case("demo_entry")]
    fn accepts_valid_entry_symbols(#[case] raw: &str) {
        assert!(EntrySymbol::parse(raw).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("has space")]
    #[case("quo\"te")]
    #[case("new\nline")]
    fn rejects_invalid_entry_symbols(#[case] raw: &str) {
        assert!(EntrySymbol::parse(raw).is_err());
    }

    #[test]
    fn default_entry_symbol_matches_constant() {
        assert_eq!(EntrySymbol::default().as_str(), DEFAULT_ENTRY_SYMBOL);
    }

    #[test]
    fn renamed_keeps_entry_symbol() {
        let id = ProjectIdentity::new(ProjectName::from("old"), EntrySymbol::from("sym"));
        let renamed = id.renamed(ProjectName::from("new"));
        assert_eq!(renamed.name.as_str(), "new");
        assert_eq!(renamed.entry_symbol, id.entry_symbol);
    }

    #[test]
    fn identity_serializes_as_plain_strings() {
        let id = ProjectIdentity::new(ProjectName::from("demo"), EntrySymbol::from("demo_entry"));
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json["name"], "demo");
        assert_eq!(json["entry_symbol"], "demo_entry");
    }

    #[test]
    fn identity_json_round_trips() {
        let id = ProjectIdentity::new(ProjectName::from("demo"), EntrySymbol::from("demo_entry"));
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(serde_json::from_str::<ProjectIdentity>(&json).unwrap(), id);
    }

    #[rstest]
    #[case(r#"{"name":"../escape","entry_symbol":"ok"}"#)]
    #[case(r#"{"name":"","entry_symbol":"ok"}"#)]
    #[case(r#"{"name":"demo","entry_symbol":"has space"}"#)]
    fn deserialize_validates_like_parse(#[case] json: &str) {
        let err = serde_json::from_str::<ProjectIdentity>(json).unwrap_err();
        assert!(err.is_data(), "unexpected error kind: {err}");
    }
}
