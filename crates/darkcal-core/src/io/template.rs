use std::path::PathBuf;

use crate::error::{DarkCalError, Result};

/// A file-path pattern with a single numeric placeholder, substituted with
/// a frame index or an exposure time.
///
/// Supported placeholders: `{}` and zero-padded `{:0N}`, e.g.
/// `darks/frame.{:08}.DARK.FIT`.
#[derive(Clone, Debug)]
pub struct PathTemplate {
    pattern: String,
    prefix: String,
    suffix: String,
    pad_width: usize,
}

impl PathTemplate {
    /// Parse a pattern, validating that it holds exactly one placeholder.
    pub fn new(pattern: &str) -> Result<Self> {
        let invalid = |reason: &str| DarkCalError::InvalidTemplate {
            template: pattern.to_string(),
            reason: reason.to_string(),
        };

        let start = pattern
            .find('{')
            .ok_or_else(|| invalid("no `{}` placeholder"))?;
        let end = pattern[start..]
            .find('}')
            .map(|i| start + i)
            .ok_or_else(|| invalid("unclosed `{`"))?;
        if pattern[..start].contains('}') {
            return Err(invalid("stray `}` before placeholder"));
        }
        let suffix = &pattern[end + 1..];
        if suffix.contains('{') || suffix.contains('}') {
            return Err(invalid("more than one placeholder"));
        }

        let spec = &pattern[start + 1..end];
        let pad_width = if spec.is_empty() {
            0
        } else {
            spec.strip_prefix(":0")
                .and_then(|digits| digits.parse().ok())
                .ok_or_else(|| invalid("unsupported placeholder, use `{}` or `{:0N}`"))?
        };

        Ok(Self {
            pattern: pattern.to_string(),
            prefix: pattern[..start].to_string(),
            suffix: suffix.to_string(),
            pad_width,
        })
    }

    /// Substitute the placeholder and return the resulting path.
    pub fn resolve(&self, value: u32) -> PathBuf {
        let formatted = if self.pad_width > 0 {
            format!("{value:0width$}", width = self.pad_width)
        } else {
            value.to_string()
        };
        PathBuf::from(format!("{}{}{}", self.prefix, formatted, self.suffix))
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}
