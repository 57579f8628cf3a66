//! Digit map generator
//!
//! Depth-first, pre-order walk of the include graph rooted at one context.
//! Each context is read-locked while its extensions are emitted and its
//! includes are listed; the lock is released before descending into any
//! include, so at most one context lock is held at a time.

use crate::dialplan::{ContextRef, DialplanSource, Extension, Include};
use crate::digitmap::cursor::OutputCursor;
use crate::digitmap::stack::ActiveStack;
use crate::digitmap::translate::translate;
use crate::digitmap::{DEFAULT_MAX_DEPTH, SEPARATOR};
use crate::error::GenerateError;
use tracing::{debug, trace, warn};

/// Generates digit maps from a dialplan source
pub struct MapGenerator<'a, S: DialplanSource + ?Sized> {
    source: &'a S,
    max_depth: usize,
}

impl<'a, S: DialplanSource + ?Sized> MapGenerator<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Bound the number of contexts on one include path.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Write the digit map for `root` into `buf`.
    ///
    /// Returns the number of bytes written. Entries are `|`-separated with no
    /// leading separator. On error the buffer contents are unspecified.
    pub fn generate(&self, root: &str, buf: &mut [u8]) -> Result<usize, GenerateError> {
        let written = {
            let mut walk = Walk {
                source: self.source,
                stack: ActiveStack::new(self.max_depth),
                cursor: OutputCursor::new(buf),
            };
            if let Err(err) = walk.context(root, "") {
                if matches!(err, GenerateError::BufferExhausted { .. }) {
                    warn!(context = root, "No space left in digit map buffer");
                }
                return Err(err);
            }
            walk.cursor.position()
        };

        if written == 0 {
            return Ok(0);
        }
        // Every entry starts with a separator; drop the first one.
        buf.copy_within(1..written, 0);
        Ok(written - 1)
    }

    /// Generate into a fresh buffer of `capacity` bytes.
    pub fn generate_string(&self, root: &str, capacity: usize) -> Result<String, GenerateError> {
        let mut buf = vec![0u8; capacity];
        let len = self.generate(root, &mut buf)?;
        buf.truncate(len);
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// State for one generation pass
struct Walk<'s, 'b, S: DialplanSource + ?Sized> {
    source: &'s S,
    stack: ActiveStack,
    cursor: OutputCursor<'b>,
}

impl<S: DialplanSource + ?Sized> Walk<'_, '_, S> {
    /// Emit `name` and everything it includes. Returns the bytes written.
    fn context(&mut self, name: &str, prefix: &str) -> Result<usize, GenerateError> {
        let context = self
            .source
            .find_context(name)
            .ok_or_else(|| GenerateError::ContextNotFound(name.to_string()))?;

        self.stack.push(name)?;
        let result = self.crawl(&context, name, prefix);
        self.stack.pop();
        result
    }

    fn crawl(&mut self, context: &ContextRef, name: &str, prefix: &str) -> Result<usize, GenerateError> {
        let start = self.cursor.position();
        debug!(
            depth = self.stack.depth(),
            context = name,
            prefix = if prefix.is_empty() { "none" } else { prefix },
            "Crawling context for extensions"
        );

        let includes: Vec<Include> = {
            let guard = context.read();
            for extension in guard.extensions() {
                self.extension(name, extension, prefix)?;
            }
            guard.includes().to_vec()
        };

        for include in &includes {
            self.include(name, include, prefix)?;
        }

        Ok(self.cursor.position() - start)
    }

    fn extension(&mut self, context: &str, extension: &Extension, prefix: &str) -> Result<(), GenerateError> {
        if extension.is_reserved() {
            return Ok(());
        }
        if !extension.priority().is_first() {
            debug!(
                context,
                extension = extension.name(),
                priority = %extension.priority(),
                "Skipping non-dialable priority"
            );
            return Ok(());
        }

        let body = extension.body();
        // With a prefix, its first digit is the one the caller dials first.
        let first = first_char(prefix).or_else(|| first_char(body));
        let second_dial_tone = first.is_some_and(|digit| self.ignore_pattern_on_path(digit));

        self.cursor.push(SEPARATOR)?;
        let start = self.cursor.position();
        let warnings = translate(prefix, body, second_dial_tone, &mut self.cursor)?;
        for warning in &warnings {
            warn!(context, extension = extension.name(), "{}", warning);
        }
        trace!(
            context,
            entry = %String::from_utf8_lossy(self.cursor.written_since(start)),
            "Added to digit map"
        );
        Ok(())
    }

    /// Whether any context on the active path ignores `digit`.
    fn ignore_pattern_on_path(&self, digit: &str) -> bool {
        self.stack.iter().any(|ancestor| {
            trace!(digit, context = ancestor, "Checking ignore patterns");
            let hit = self.source.matches_ignore_pattern(ancestor, digit);
            if hit {
                debug!(digit, context = ancestor, "Ignore pattern match");
            }
            hit
        })
    }

    fn include(&mut self, context: &str, include: &Include, prefix: &str) -> Result<(), GenerateError> {
        let Some(spec) = include.spec() else {
            warn!(include = include.raw(), "{}", GenerateError::MalformedInclude(context.to_string()));
            return Ok(());
        };
        if !spec.prefix().is_empty() {
            debug!(context, include = spec.target, prefix = spec.prefix(), "Found an include prefix");
        }

        if self.stack.contains(spec.target) {
            let err = GenerateError::CircularInclude {
                target: spec.target.to_string(),
                context: context.to_string(),
            };
            warn!("{}", err);
            return Ok(());
        }

        let prefix = format!("{}{}", prefix, spec.prefix());
        match self.context(spec.target, &prefix) {
            Ok(written) => {
                trace!(context, include = spec.target, bytes = written, "Include crawled");
                Ok(())
            }
            Err(
                err @ (GenerateError::MaxDepthExceeded { .. }
                | GenerateError::ContextNotFound(_)
                | GenerateError::CircularInclude { .. }),
            ) => {
                warn!(context, include = spec.target, "Skipping include: {}", err);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

fn first_char(s: &str) -> Option<&str> {
    s.chars().next().map(|c| &s[..c.len_utf8()])
}
