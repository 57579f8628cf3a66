//! Pattern translation
//!
//! Rewrites one dialplan pattern body into digit map syntax:
//!
//! | dialplan | digit map |
//! |----------|-----------|
//! | `N`      | `[2-9]`   |
//! | `Z`      | `[1-9]`   |
//! | `X`      | `x`       |
//! | `!`      | `S0`      |
//!
//! Everything else, `.` and bracket sets included, is copied as is. Malformed
//! sets are reported as [`PatternWarning`]s but still copied.

use crate::digitmap::cursor::OutputCursor;
use crate::digitmap::SECOND_DIAL_TONE;
use crate::error::{GenerateError, PatternWarning};

/// Append `prefix` and the translated `body` to `cursor`.
///
/// With `second_dial_tone` set, the marker goes right after a non-empty
/// prefix, or otherwise after the first translated token of the body. Fails
/// only when the cursor runs out of room.
pub fn translate(
    prefix: &str,
    body: &str,
    second_dial_tone: bool,
    cursor: &mut OutputCursor<'_>,
) -> Result<Vec<PatternWarning>, GenerateError> {
    let mut warnings = Vec::new();
    let mut pending_marker = second_dial_tone;
    let mut set = SetState::default();

    cursor.push_str(prefix)?;
    if pending_marker && !prefix.is_empty() {
        cursor.push(SECOND_DIAL_TONE)?;
        pending_marker = false;
    }

    for (offset, c) in body.char_indices() {
        match c {
            'N' => cursor.push_str("[2-9]")?,
            'Z' => cursor.push_str("[1-9]")?,
            'X' => cursor.push('x')?,
            '!' => cursor.push_str("S0")?,
            _ => {
                if let Some(warning) = set.observe(c, offset) {
                    warnings.push(warning);
                }
                cursor.push(c)?;
            }
        }
        if pending_marker {
            cursor.push(SECOND_DIAL_TONE)?;
            pending_marker = false;
        }
    }

    if set.depth > 0 {
        warnings.push(PatternWarning::UnterminatedSet);
    }
    Ok(warnings)
}

/// Bracket set bookkeeping for one pattern
#[derive(Debug, Default)]
struct SetState {
    depth: u32,
    discrete: i32,
    ranges: u32,
}

impl SetState {
    fn observe(&mut self, c: char, offset: usize) -> Option<PatternWarning> {
        match c {
            '[' => {
                self.discrete = 0;
                self.ranges = 0;
                if self.depth >= 1 {
                    self.depth = 1;
                    return Some(PatternWarning::NestedSet { offset });
                }
                self.depth = 1;
                None
            }
            ']' => {
                // Devices reject sets like [02-9]; they want [0]|[2-9] or [023456789].
                let mixed = self.ranges > 0 && self.discrete > 1;
                self.discrete = 0;
                self.ranges = 0;
                if self.depth == 0 {
                    return Some(PatternWarning::UnmatchedClose { offset });
                }
                self.depth -= 1;
                mixed.then_some(PatternWarning::MixedSet { offset })
            }
            _ if self.depth == 0 => None,
            '.' => Some(PatternWarning::PeriodInSet { offset }),
            '-' => {
                self.discrete -= 1;
                self.ranges += 1;
                None
            }
            _ => {
                self.discrete += 1;
                None
            }
        }
    }
}
