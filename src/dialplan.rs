//! Dialplan Host
//!
//! In-memory registry of dialplan contexts. Each context sits behind its own
//! read/write lock so that a generation pass can lock one context at a time
//! while administrative edits proceed on others.

pub mod context;
pub mod include;
pub mod loader;
pub mod pattern;

pub use context::{Context, Extension, IgnorePattern, Priority};
pub use include::{Include, IncludeSpec};

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Shared handle to a lock-protected context
pub type ContextRef = Arc<RwLock<Context>>;

/// The view of a dialplan engine that digit map generation consumes.
pub trait DialplanSource {
    /// Resolve a context by its exact name.
    fn find_context(&self, name: &str) -> Option<ContextRef>;

    /// Whether `context` has an ignore pattern matching the dialed `digits`.
    ///
    /// Must be callable while the caller holds a read lock on `context`.
    fn matches_ignore_pattern(&self, context: &str, digits: &str) -> bool;
}

/// Registry of named contexts
#[derive(Debug, Default)]
pub struct Dialplan {
    contexts: RwLock<HashMap<String, ContextRef>>,
}

impl Dialplan {
    /// Create an empty dialplan
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a context, replacing any context with the same name.
    pub fn insert(&self, context: Context) -> Option<ContextRef> {
        let name = context.name().to_string();
        self.contexts
            .write()
            .insert(name, Arc::new(RwLock::new(context)))
    }

    /// Return the named context, creating an empty one if it does not exist yet.
    pub fn context_or_insert(&self, name: &str) -> ContextRef {
        let mut contexts = self.contexts.write();
        Arc::clone(
            contexts
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(RwLock::new(Context::new(name)))),
        )
    }

    /// Remove a context from the registry.
    pub fn remove(&self, name: &str) -> Option<ContextRef> {
        self.contexts.write().remove(name)
    }

    /// Context names in sorted order
    pub fn context_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.contexts.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.contexts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.read().is_empty()
    }
}

impl DialplanSource for Dialplan {
    fn find_context(&self, name: &str) -> Option<ContextRef> {
        self.contexts.read().get(name).cloned()
    }

    fn matches_ignore_pattern(&self, context: &str, digits: &str) -> bool {
        let Some(context) = self.find_context(context) else {
            return false;
        };
        // The generator may already hold a read lock on this context.
        let guard = context.read_recursive();
        let hit = guard
            .ignore_patterns()
            .iter()
            .any(|ignore| ignore.matches(digits));
        hit
    }
}
