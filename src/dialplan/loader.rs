//! Dialplan loader for a subset of `extensions.conf`
//!
//! Supported directives inside `[context]` sections:
//!
//! ```text
//! exten => _NXXXXXX,1,Dial(SIP/trunk/${EXTEN})
//! same => n,Hangup()
//! include => intl|x|011
//! ignorepat => 9
//! ```
//!
//! `;` starts a comment (`\;` is a literal semicolon). The `[general]` and
//! `[globals]` sections hold settings, not contexts, and are skipped.
//! Repeating a context header appends to the existing context.

use crate::dialplan::{
    ContextRef, Dialplan, Extension, IgnorePattern, Include, Priority,
};
use crate::error::DialplanError;
use std::path::Path;
use tracing::{debug, info};

const SETTINGS_SECTIONS: &[&str] = &["general", "globals"];

/// Load a dialplan from a file on disk
pub fn load_file(path: &Path) -> Result<Dialplan, DialplanError> {
    let source = std::fs::read_to_string(path)?;
    let dialplan = parse_str(&source)?;
    info!(
        path = %path.display(),
        contexts = dialplan.len(),
        "Loaded dialplan"
    );
    Ok(dialplan)
}

/// Parse dialplan source text
pub fn parse_str(source: &str) -> Result<Dialplan, DialplanError> {
    let dialplan = Dialplan::new();
    let mut parser = Parser {
        section: Section::None,
        last: None,
    };

    for (index, raw_line) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(raw_line);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let Some(end) = header.find(']') else {
                return Err(syntax(line_no, "unterminated context header"));
            };
            let name = header[..end].trim();
            if name.is_empty() {
                return Err(syntax(line_no, "empty context name"));
            }
            parser.last = None;
            parser.section = if SETTINGS_SECTIONS.contains(&name.to_ascii_lowercase().as_str()) {
                Section::Settings
            } else {
                Section::Context(dialplan.context_or_insert(name))
            };
            continue;
        }

        let Some((key, value)) = split_directive(line) else {
            return Err(syntax(line_no, format!("expected `key => value`, got `{}`", line)));
        };

        let context = match &parser.section {
            Section::Context(context) => ContextRef::clone(context),
            Section::Settings => continue,
            Section::None => {
                return Err(syntax(line_no, "directive outside of a context"));
            }
        };

        match key.as_str() {
            "exten" => {
                let mut fields = value.splitn(3, ',');
                let name = fields.next().unwrap_or_default().trim();
                // Caller ID matching (`exten => 100/5551234,...`) is not part of the name.
                let name = name.split('/').next().unwrap_or_default();
                if name.is_empty() {
                    return Err(syntax(line_no, "extension without a name"));
                }
                let priority = fields.next().unwrap_or_default();
                let application = fields.next().unwrap_or_default().trim();
                let priority = parser.priority(line_no, name, priority)?;
                context
                    .write()
                    .add_extension(Extension::new(name, priority, application));
                parser.last = Some((name.to_string(), priority));
            }
            "same" => {
                let Some((name, _)) = parser.last.clone() else {
                    return Err(syntax(line_no, "`same` without a preceding extension"));
                };
                let (priority, application) = value.split_once(',').unwrap_or((value, ""));
                let priority = parser.priority(line_no, &name, priority)?;
                context
                    .write()
                    .add_extension(Extension::new(name.as_str(), priority, application.trim()));
                parser.last = Some((name, priority));
            }
            "include" => {
                context.write().add_include(Include::new(value));
            }
            "ignorepat" => {
                context.write().add_ignore_pattern(IgnorePattern::new(value));
            }
            other => {
                debug!(line = line_no, directive = other, "Skipping unsupported directive");
            }
        }
    }

    Ok(dialplan)
}

enum Section {
    None,
    Settings,
    Context(ContextRef),
}

struct Parser {
    section: Section,
    last: Option<(String, Priority)>,
}

impl Parser {
    fn priority(&self, line: usize, name: &str, raw: &str) -> Result<Priority, DialplanError> {
        // Labels (`n(dial)`, `1(start)`) do not affect the priority value.
        let raw = raw.trim();
        let value = raw.split('(').next().unwrap_or_default().trim();
        match value.to_ascii_lowercase().as_str() {
            "hint" => Ok(Priority::Hint),
            "n" => match &self.last {
                Some((last_name, Priority::Step(step))) if last_name == name => {
                    Ok(Priority::Step(step + 1))
                }
                _ => Err(syntax(line, format!("priority `n` has no previous step for {}", name))),
            },
            "" => Err(syntax(line, format!("missing priority for {}", name))),
            number => number
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .map(Priority::Step)
                .ok_or_else(|| syntax(line, format!("invalid priority `{}`", raw))),
        }
    }
}

fn split_directive(line: &str) -> Option<(String, &str)> {
    let (key, value) = line
        .split_once("=>")
        .or_else(|| line.split_once('='))?;
    let key = key.trim().to_ascii_lowercase();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// Cut a `;` comment, unescaping `\;` to a literal semicolon.
fn strip_comment(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&';') => {
                out.push(';');
                chars.next();
            }
            ';' => break,
            _ => out.push(c),
        }
    }
    out
}

fn syntax(line: usize, message: impl Into<String>) -> DialplanError {
    DialplanError::Syntax {
        line,
        message: message.into(),
    }
}
