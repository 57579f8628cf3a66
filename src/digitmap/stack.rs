//! Active include path

use crate::error::GenerateError;

/// Context names on the current recursion path, outermost first.
///
/// Holds at most `max_depth` names and never the same name twice (names are
/// compared ignoring ASCII case).
#[derive(Debug, Clone)]
pub struct ActiveStack {
    names: Vec<String>,
    max_depth: usize,
}

impl ActiveStack {
    pub fn new(max_depth: usize) -> Self {
        Self {
            names: Vec::new(),
            max_depth,
        }
    }

    pub fn push(&mut self, name: &str) -> Result<(), GenerateError> {
        if self.names.len() >= self.max_depth {
            return Err(GenerateError::MaxDepthExceeded {
                context: name.to_string(),
                max_depth: self.max_depth,
            });
        }
        if self.contains(name) {
            return Err(GenerateError::CircularInclude {
                target: name.to_string(),
                context: self.names.last().cloned().unwrap_or_default(),
            });
        }
        self.names.push(name.to_string());
        Ok(())
    }

    pub fn pop(&mut self) -> Option<String> {
        self.names.pop()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    pub fn depth(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
