//! Argument validation shared by every resource operation.
//!
//! Validators collect every problem instead of stopping at the first one, so a
//! caller sees the complete list of offending fields in one round trip.

use crate::params::ArgValue;
use serde::Serialize;
use std::ops::RangeInclusive;

/// One offending field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

/// Malformed or out-of-range input. Terminal: never retried, never degraded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation error: {}", render_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![FieldIssue {
                path: path.into(),
                message: message.into(),
            }],
        }
    }

    /// Wrap a deserialization failure of the whole argument object.
    pub fn from_arguments(error: &serde_json::Error) -> Self {
        Self::single("arguments", error.to_string())
    }

    pub fn paths(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.path.as_str()).collect()
    }
}

fn render_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("{}: {}", i.path, i.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Implemented by every parameter object accepted by a resource operation.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Accumulates field issues for one parameter object.
#[derive(Debug, Default)]
pub struct Validator {
    issues: Vec<FieldIssue>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: &str, message: impl Into<String>) {
        self.issues.push(FieldIssue {
            path: path.to_string(),
            message: message.into(),
        });
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                issues: self.issues,
            })
        }
    }

    fn required<T>(&mut self, path: &str, value: Option<T>, required: bool) -> Option<T> {
        if value.is_none() && required {
            self.push(path, "Required");
        }
        value
    }

    /// Locale code such as `en`, `ar` or `fr-CA`.
    pub fn language(&mut self, path: &str, value: Option<&str>, required: bool) {
        let Some(value) = self.required(path, value, required) else {
            return;
        };
        let code = value.trim();
        if code.len() < 2 {
            self.push(path, "Language code must be at least 2 characters");
        } else if code.len() > 10 {
            self.push(path, "Language code must not exceed 10 characters");
        } else if !code.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
            self.push(path, "Language code must contain only letters and hyphens");
        }
    }

    /// Integer given as a JSON number or a digit string, within `range`.
    pub fn number(
        &mut self,
        path: &str,
        label: &str,
        value: Option<&ArgValue>,
        range: RangeInclusive<u64>,
        required: bool,
    ) {
        let Some(value) = self.required(path, value, required) else {
            return;
        };
        match value.as_u64() {
            None => self.push(path, format!("{label} must be a positive integer")),
            Some(n) if !range.contains(&n) => {
                if *range.end() == u64::MAX {
                    self.push(path, format!("{label} must be at least {}", range.start()));
                } else {
                    self.push(
                        path,
                        format!("{label} must be between {} and {}", range.start(), range.end()),
                    );
                }
            }
            Some(_) => {}
        }
    }

    /// `chapter:verse`, e.g. `2:255`.
    pub fn verse_key(&mut self, path: &str, value: Option<&str>, required: bool) {
        let Some(value) = self.required(path, value, required) else {
            return;
        };
        if parse_verse_key(value).is_none() {
            self.push(
                path,
                "Verse key must look like chapter:verse with chapter between 1 and 114",
            );
        }
    }

    /// Resource identifier used as a URL path segment.
    pub fn identifier(&mut self, path: &str, label: &str, value: Option<&str>, required: bool) {
        let Some(value) = self.required(path, value, required) else {
            return;
        };
        let value = value.trim();
        if value.is_empty() || !value.chars().all(is_identifier_char) {
            self.push(
                path,
                format!("{label} must contain only letters, digits, hyphens and underscores"),
            );
        }
    }

    /// Comma separated list of identifiers.
    pub fn identifier_list(&mut self, path: &str, value: Option<&str>) {
        let Some(value) = value else {
            return;
        };
        let valid = value
            .split(',')
            .map(str::trim)
            .all(|part| !part.is_empty() && part.chars().all(is_identifier_char));
        if !valid {
            self.push(path, "Must be a comma separated list of ids");
        }
    }

    pub fn non_empty(&mut self, path: &str, label: &str, value: Option<&str>, required: bool) {
        let Some(value) = self.required(path, value, required) else {
            return;
        };
        if value.trim().is_empty() {
            self.push(path, format!("{label} must not be empty"));
        }
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Split a verse key into its chapter and verse numbers.
pub fn parse_verse_key(key: &str) -> Option<(u64, u64)> {
    let (chapter, verse) = key.trim().split_once(':')?;
    if chapter.is_empty()
        || verse.is_empty()
        || !chapter.bytes().all(|b| b.is_ascii_digit())
        || !verse.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let chapter: u64 = chapter.parse().ok()?;
    let verse: u64 = verse.parse().ok()?;
    ((1..=114).contains(&chapter) && verse >= 1).then_some((chapter, verse))
}
