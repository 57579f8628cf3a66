//! Context, extension and ignore pattern records

use crate::dialplan::include::Include;
use crate::dialplan::pattern;

/// Extension names that are never dialable: `a` (asterisk), `i` (invalid),
/// `s` (start) and `t` (timeout).
pub const RESERVED_EXTENSIONS: &[&str] = &["a", "i", "s", "t"];

/// Leading marker that makes an extension name a pattern
pub const PATTERN_MARKER: char = '_';

/// Extension priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Device state hint; never dialable
    Hint,
    /// Numbered dialplan step
    Step(u32),
}

impl Priority {
    /// Only the first step of an extension is dialable.
    pub fn is_first(&self) -> bool {
        matches!(self, Priority::Step(1))
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Hint => write!(f, "hint"),
            Priority::Step(n) => write!(f, "{}", n),
        }
    }
}

/// A single extension entry (one name/priority pair)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    name: String,
    priority: Priority,
    application: String,
}

impl Extension {
    pub fn new(name: impl Into<String>, priority: Priority, application: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority,
            application: application.into(),
        }
    }

    /// Shorthand for a priority-1 entry
    pub fn first(name: impl Into<String>, application: impl Into<String>) -> Self {
        Self::new(name, Priority::Step(1), application)
    }

    /// Raw name, including the pattern marker if present
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn application(&self) -> &str {
        &self.application
    }

    pub fn is_pattern(&self) -> bool {
        self.name.starts_with(PATTERN_MARKER)
    }

    /// Name with the pattern marker stripped
    pub fn body(&self) -> &str {
        if self.is_pattern() {
            &self.name[PATTERN_MARKER.len_utf8()..]
        } else {
            &self.name
        }
    }

    pub fn is_reserved(&self) -> bool {
        RESERVED_EXTENSIONS.contains(&self.name.as_str())
    }
}

/// Per-context guard requesting a second dial tone after the matched digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnorePattern {
    pattern: String,
}

impl IgnorePattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, digits: &str) -> bool {
        pattern::matches(&self.pattern, digits)
    }
}

/// A named dialplan context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    name: String,
    extensions: Vec<Extension>,
    includes: Vec<Include>,
    ignore_patterns: Vec<IgnorePattern>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extensions: Vec::new(),
            includes: Vec::new(),
            ignore_patterns: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extensions in declaration order
    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    /// Includes in declaration order
    pub fn includes(&self) -> &[Include] {
        &self.includes
    }

    pub fn ignore_patterns(&self) -> &[IgnorePattern] {
        &self.ignore_patterns
    }

    pub fn add_extension(&mut self, extension: Extension) {
        self.extensions.push(extension);
    }

    pub fn add_include(&mut self, include: Include) {
        self.includes.push(include);
    }

    /// Add an ignore pattern; duplicates are kept once.
    pub fn add_ignore_pattern(&mut self, ignore: IgnorePattern) {
        if !self.ignore_patterns.contains(&ignore) {
            self.ignore_patterns.push(ignore);
        }
    }

    /// Builder form of [`Context::add_extension`] for a priority-1 entry
    pub fn with_extension(mut self, name: &str) -> Self {
        self.add_extension(Extension::first(name, "NoOp()"));
        self
    }

    pub fn with_entry(mut self, extension: Extension) -> Self {
        self.add_extension(extension);
        self
    }

    pub fn with_include(mut self, include: Include) -> Self {
        self.add_include(include);
        self
    }

    pub fn with_ignore_pattern(mut self, pattern: &str) -> Self {
        self.add_ignore_pattern(IgnorePattern::new(pattern));
        self
    }
}
