//! Event scripts: recorded input replayed against a session.
//!
//! One event per line:
//!
//! ```text
//! # draw a thick blue line
//! key e
//! key 5
//! key r
//! click 10 10
//! click 60.5 40
//! ```
//!
//! Blank lines and `#` comments are skipped. Keys without a binding are
//! dropped, the same as an unbound key press.

use std::path::Path;

use tracing::trace;

use crate::error::{Error, Result};
use crate::input::{InputEvent, InputHandler};

/// Parses an event script into input events.
///
/// # Errors
///
/// Returns [`Error::ScriptParse`] with the 1-indexed line of the first
/// malformed event.
pub fn parse(script: &str, handler: &InputHandler) -> Result<Vec<InputEvent>> {
    let mut events = Vec::new();

    for (index, raw) in script.lines().enumerate() {
        let line = index + 1;
        let text = raw.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }

        let err = |message: String| Error::ScriptParse { line, message };
        let mut words = text.split_whitespace();

        match words.next() {
            Some("key") => {
                let key = match (words.next(), words.next()) {
                    (Some(k), None) => single_char(k)
                        .ok_or_else(|| err(format!("expected a single character, got '{k}'")))?,
                    _ => return Err(err("expected 'key <char>'".to_string())),
                };
                match handler.handle_key(key) {
                    Some(event) => events.push(event),
                    None => trace!(line, %key, "unbound key skipped"),
                }
            }
            Some("click") => {
                let (x, y) = match (words.next(), words.next(), words.next()) {
                    (Some(x), Some(y), None) => (coordinate(x), coordinate(y)),
                    _ => return Err(err("expected 'click <x> <y>'".to_string())),
                };
                let x = x.ok_or_else(|| err("x coordinate is invalid or out of range".into()))?;
                let y = y.ok_or_else(|| err("y coordinate is invalid or out of range".into()))?;
                events.push(InputEvent::pointer(x, y));
            }
            Some(other) => return Err(err(format!("unknown event '{other}'"))),
            None => {}
        }
    }

    Ok(events)
}

/// Reads and parses an event script file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line is malformed.
pub fn load(path: impl AsRef<Path>, handler: &InputHandler) -> Result<Vec<InputEvent>> {
    let script = std::fs::read_to_string(path)?;
    parse(&script, handler)
}

fn single_char(word: &str) -> Option<char> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Parses a coordinate that rounds to a valid pixel position.
fn coordinate(word: &str) -> Option<f64> {
    let range = f64::from(i32::MIN) - 0.5..f64::from(i32::MAX) + 0.5;
    word.parse::<f64>().ok().filter(|v| range.contains(v))
}
