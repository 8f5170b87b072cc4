//! Rendering shared by the `simulate` and `resolve` commands.
//!
//! JSON goes to stdout pretty-printed with object keys highlighted; the
//! table cells below keep the trajectory and obstacle tables narrow.

use colored::Colorize;
use serde::Serialize;

use crate::error::{DeskpetError, DeskpetResult};
use crate::platform::StackTarget;
use crate::simulation::AnimData;

/// Widest animation clip name shown in the trajectory table.
pub const CLIP_COLUMN_WIDTH: usize = 16;

/// Serializes `value` as indented JSON.
///
/// # Errors
///
/// Returns [`DeskpetError::OutputError`] if `value` cannot be represented as JSON.
pub fn to_pretty_json<T: Serialize>(value: &T) -> DeskpetResult<String> {
    serde_json::to_string_pretty(value).map_err(|err| DeskpetError::OutputError(err.to_string()))
}

/// Prints `value` as indented JSON with highlighted keys.
///
/// # Errors
///
/// Same as [`to_pretty_json`].
pub fn print_json<T: Serialize>(value: &T) -> DeskpetResult<()> {
    for line in to_pretty_json(value)?.lines() {
        println!("{}", highlight_key(line));
    }
    Ok(())
}

/// Colors the key of a `"key": value` line. Other lines pass through.
fn highlight_key(line: &str) -> String {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];
    body.strip_prefix('"')
        .and_then(|rest| rest.split_once("\": "))
        .filter(|(key, _)| !key.contains('"'))
        .map_or_else(
            || line.to_string(),
            |(key, value)| format!("{indent}{}: {value}", format!("\"{key}\"").cyan()),
        )
}

/// `"topmost"` (dimmed) or the handle the pet sits beneath.
#[must_use]
pub fn stack_target(target: StackTarget) -> String {
    match target {
        StackTarget::Topmost => "topmost".dimmed().to_string(),
        StackTarget::Beneath(handle) => handle.to_string(),
    }
}

/// Clip name of a newly started animation, cut to `max_chars` characters.
#[must_use]
pub fn clip_name(anim: Option<&AnimData>, max_chars: usize) -> String {
    let Some(anim) = anim else {
        return String::new();
    };
    if anim.clip.chars().count() <= max_chars {
        return anim.clip.clone();
    }
    let kept: String = anim.clip.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Peer index, or a dimmed `none` for windows outside the peer group.
#[must_use]
pub fn peer_index(index: Option<u32>) -> String {
    index.map_or_else(|| "none".dimmed().to_string(), |i| i.to_string())
}

/// Marks ground barriers; ordinary platforms stay blank.
#[must_use]
pub fn ground_marker(is_ground: bool) -> String {
    if is_ground { "ground".green().to_string() } else { String::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::WindowHandle;

    fn plain() { colored::control::set_override(false); }

    #[test]
    fn test_highlight_key_keeps_text() {
        plain();
        assert_eq!(highlight_key(r#"  "dropState": "grounded","#), r#"  "dropState": "grounded","#);
        assert_eq!(highlight_key("  ],"), "  ],");
        assert_eq!(highlight_key(r#"    "Relax""#), r#"    "Relax""#);
    }

    #[test]
    fn test_to_pretty_json() {
        let json = to_pretty_json(&StackTarget::Beneath(WindowHandle(4))).unwrap();
        assert!(json.contains("\"kind\": \"beneath\""));
        assert!(json.contains("\"handle\": 4"));
    }

    #[test]
    fn test_to_pretty_json_rejects_non_string_keys() {
        let mut map = std::collections::BTreeMap::new();
        map.insert((1, 2), 3);
        let err = to_pretty_json(&map).unwrap_err();
        assert!(matches!(err, DeskpetError::OutputError(_)));
    }

    #[test]
    fn test_stack_target_cell() {
        plain();
        assert_eq!(stack_target(StackTarget::Topmost), "topmost");
        assert_eq!(stack_target(StackTarget::Beneath(WindowHandle(9))), WindowHandle(9).to_string());
    }

    #[test]
    fn test_clip_name_cuts_long_names() {
        let short = AnimData::looping("Relax", 0);
        assert_eq!(clip_name(Some(&short), CLIP_COLUMN_WIDTH), "Relax");

        let long = AnimData::once("Stretch·Yawn·Roll");
        assert_eq!(clip_name(Some(&long), 8), "Stretch…");
        assert_eq!(clip_name(Some(&long), 0), "…");
        assert_eq!(clip_name(None, CLIP_COLUMN_WIDTH), "");
    }

    #[test]
    fn test_peer_index_and_ground_cells() {
        plain();
        assert_eq!(peer_index(Some(3)), "3");
        assert_eq!(peer_index(None), "none");
        assert_eq!(ground_marker(true), "ground");
        assert!(ground_marker(false).is_empty());
    }
}
