//! Overwrite policy and navigation options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Policy for replacing an existing node whose kind does not fit the path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OverwriteMode {
    /// Never replace; any mismatch is an error.
    #[serde(alias = "none")]
    None,
    /// Replace only explicit `null` values.
    #[default]
    #[serde(alias = "nulls")]
    Nulls,
    /// Always replace.
    #[serde(alias = "all")]
    All,
}

impl OverwriteMode {
    /// Whether `existing` may be discarded in favour of a fresh container.
    pub fn may_replace(self, existing: &Value) -> bool {
        match self {
            OverwriteMode::None => false,
            OverwriteMode::Nulls => existing.is_null(),
            OverwriteMode::All => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OverwriteMode::None => "none",
            OverwriteMode::Nulls => "nulls",
            OverwriteMode::All => "all",
        }
    }
}

impl fmt::Display for OverwriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown overwrite mode \"{0}\" (expected none, nulls or all)")]
pub struct ParseModeError(pub String);

impl FromStr for OverwriteMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(OverwriteMode::None),
            "nulls" => Ok(OverwriteMode::Nulls),
            "all" => Ok(OverwriteMode::All),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Options for a get-or-create navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WithOptions {
    /// Policy applied to occupied, mismatched slots.
    pub mode: OverwriteMode,
    /// Create arrays (rather than objects) for missing intermediate
    /// containers whose next segment is a valid index.
    pub prefer_index: bool,
}

impl Default for WithOptions {
    fn default() -> Self {
        Self {
            mode: OverwriteMode::Nulls,
            prefer_index: true,
        }
    }
}

impl WithOptions {
    pub fn new(mode: OverwriteMode, prefer_index: bool) -> Self {
        Self { mode, prefer_index }
    }

    pub fn with_mode(mut self, mode: OverwriteMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_prefer_index(mut self, prefer_index: bool) -> Self {
        self.prefer_index = prefer_index;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_may_replace_matrix() {
        let null = json!(null);
        let scalar = json!(13);
        assert!(!OverwriteMode::None.may_replace(&null));
        assert!(!OverwriteMode::None.may_replace(&scalar));
        assert!(OverwriteMode::Nulls.may_replace(&null));
        assert!(!OverwriteMode::Nulls.may_replace(&scalar));
        assert!(OverwriteMode::All.may_replace(&null));
        assert!(OverwriteMode::All.may_replace(&scalar));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("NONE".parse::<OverwriteMode>(), Ok(OverwriteMode::None));
        assert_eq!("Nulls".parse::<OverwriteMode>(), Ok(OverwriteMode::Nulls));
        assert_eq!("all".parse::<OverwriteMode>(), Ok(OverwriteMode::All));
        assert_eq!(
            "scalars".parse::<OverwriteMode>(),
            Err(ParseModeError("scalars".to_string()))
        );
    }

    #[test]
    fn test_default_options() {
        let options = WithOptions::default();
        assert_eq!(options.mode, OverwriteMode::Nulls);
        assert!(options.prefer_index);
        assert_eq!(
            options.with_mode(OverwriteMode::All).with_prefer_index(false),
            WithOptions::new(OverwriteMode::All, false)
        );
    }

    #[test]
    fn test_options_from_json() {
        let options: WithOptions = serde_json::from_value(json!({"mode": "ALL"})).unwrap();
        assert_eq!(options, WithOptions::new(OverwriteMode::All, true));

        let options: WithOptions =
            serde_json::from_value(json!({"mode": "none", "preferIndex": false})).unwrap();
        assert_eq!(options, WithOptions::new(OverwriteMode::None, false));

        let options: WithOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options, WithOptions::default());
        assert_eq!(serde_json::to_value(OverwriteMode::Nulls).unwrap(), json!("NULLS"));
    }
}
