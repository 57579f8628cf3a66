//! Include entries
//!
//! The host stores an include as a single string, `target|arg1|arg2`, where the
//! target may carry comma-separated timing arguments. The second auxiliary
//! argument is a digit prefix for everything reached through the include.

/// Separator between an include's target and its auxiliary arguments
pub const ARG_SEPARATOR: char = '|';

/// A raw include entry as stored in a context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Include {
    raw: String,
}

impl Include {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Include `target` with a digit prefix in the prefix argument position.
    pub fn with_prefix(target: &str, prefix: &str) -> Self {
        Self::new(format!("{target}{ARG_SEPARATOR}{ARG_SEPARATOR}{prefix}"))
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parse the raw entry; `None` when it names no context.
    pub fn spec(&self) -> Option<IncludeSpec<'_>> {
        IncludeSpec::parse(&self.raw)
    }
}

/// Parsed view of an include entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeSpec<'a> {
    pub target: &'a str,
    pub args: Vec<&'a str>,
}

impl<'a> IncludeSpec<'a> {
    pub fn parse(raw: &'a str) -> Option<Self> {
        let mut parts = raw.split(ARG_SEPARATOR);
        let name = parts.next().unwrap_or_default();
        // Timing arguments follow the context name after a comma.
        let target = name.split(',').next().unwrap_or_default().trim();
        if target.is_empty() {
            return None;
        }
        Some(Self {
            target,
            args: parts.collect(),
        })
    }

    /// Digit prefix carried by the include, empty when absent
    pub fn prefix(&self) -> &'a str {
        self.args.get(1).copied().unwrap_or_default()
    }
}
