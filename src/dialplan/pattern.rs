//! Dialplan pattern matching
//!
//! Full-string matching of dialed digits against extension names. A name
//! without the `_` marker matches only itself. Pattern letters are
//! case-insensitive: `N` is 2-9, `Z` is 1-9, `X` is 0-9, `[...]` is a set with
//! optional ranges, `.` is one or more of anything and `!` is zero or more.

use crate::dialplan::context::PATTERN_MARKER;

/// Match `dialed` against a dialplan extension name or pattern.
pub fn matches(pattern: &str, dialed: &str) -> bool {
    match pattern.strip_prefix(PATTERN_MARKER) {
        Some(body) => match_from(body.as_bytes(), dialed.as_bytes()),
        None => pattern == dialed,
    }
}

fn match_from(pattern: &[u8], dialed: &[u8]) -> bool {
    let Some((&token, rest)) = pattern.split_first() else {
        return dialed.is_empty();
    };
    match token {
        b'.' => !dialed.is_empty(),
        b'!' => true,
        b'[' => {
            let Some(close) = rest.iter().position(|&b| b == b']') else {
                return false;
            };
            let Some((&digit, remaining)) = dialed.split_first() else {
                return false;
            };
            set_contains(&rest[..close], digit) && match_from(&rest[close + 1..], remaining)
        }
        _ => {
            let Some((&digit, remaining)) = dialed.split_first() else {
                return false;
            };
            let hit = match token.to_ascii_uppercase() {
                b'N' => (b'2'..=b'9').contains(&digit),
                b'Z' => (b'1'..=b'9').contains(&digit),
                b'X' => digit.is_ascii_digit(),
                _ => token == digit,
            };
            hit && match_from(rest, remaining)
        }
    }
}

fn set_contains(set: &[u8], digit: u8) -> bool {
    let mut i = 0;
    while i < set.len() {
        if i + 2 < set.len() && set[i + 1] == b'-' {
            if (set[i]..=set[i + 2]).contains(&digit) {
                return true;
            }
            i += 3;
        } else {
            if set[i] == digit {
                return true;
            }
            i += 1;
        }
    }
    false
}
