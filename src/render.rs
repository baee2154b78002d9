//! Terminal rendering of the store as colorized YAML.
//!
//! Coloring follows common YAML highlighting conventions:
//! - Top-level keys (category names): bold magenta
//! - Nested keys: bold
//! - List markers: cyan
//! - Numbers: yellow
//! - Booleans, nulls, `[]` and `{}`: magenta
//! - Other scalars: green
//! - Comments: blue

use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use regex::Regex;
use std::ffi::OsString;
use std::sync::LazyLock;

use crate::constants::COLOR_ENV;

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#.*$").expect("comment pattern is valid"));
static KEY_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)([^:\n]+?)(:)(\s*)(.*)$").expect("key/value pattern is valid")
});
static DASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)-\s+(.*)$").expect("list pattern is valid"));
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?$").expect("number pattern is valid")
});

/// Decides whether output should be colored.
///
/// Color is off when the caller disallows it, when `NO_COLOR` is set to a
/// non-empty value, when `PB_COLOR=0`, or when stdout is not a terminal.
pub fn color_enabled(allow: bool) -> bool {
    should_colorize(
        allow,
        std::env::var_os("NO_COLOR"),
        std::env::var_os(COLOR_ENV),
        std::io::stdout().is_tty(),
    )
}

fn should_colorize(
    allow: bool,
    no_color: Option<OsString>,
    pb_color: Option<OsString>,
    is_tty: bool,
) -> bool {
    if !allow {
        return false;
    }
    if no_color.is_some_and(|v| !v.is_empty()) {
        return false;
    }
    if pb_color.is_some_and(|v| v == "0") {
        return false;
    }
    is_tty
}

/// Colorizes YAML text line by line. Returns the text unchanged when
/// `color` is false.
pub fn colorize_yaml(yaml: &str, color: bool) -> String {
    if !color {
        return yaml.to_string();
    }

    yaml.lines()
        .map(colorize_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn colorize_line(line: &str) -> String {
    if COMMENT_RE.is_match(line) {
        return line.blue().to_string();
    }

    if let Some(caps) = DASH_RE.captures(line) {
        let indent = &caps[1];
        let rest = &caps[2];
        // "- key: value" keeps key highlighting for the first field of a mapping
        let rest = match KEY_VALUE_RE.captures(rest) {
            Some(kv) => colorize_key_value(&kv[2], &kv[4], &kv[5], false),
            None => color_value(rest),
        };
        return format!("{}{}{}", indent, "- ".cyan(), rest);
    }

    if let Some(caps) = KEY_VALUE_RE.captures(line) {
        let indent = &caps[1];
        return format!(
            "{}{}",
            indent,
            colorize_key_value(&caps[2], &caps[4], &caps[5], indent.is_empty())
        );
    }

    line.to_string()
}

fn colorize_key_value(key: &str, space: &str, value: &str, top_level: bool) -> String {
    let key = if top_level {
        key.bold().magenta().to_string()
    } else {
        key.bold().to_string()
    };
    let value = if value.is_empty() {
        String::new()
    } else {
        color_value(value)
    };
    format!("{}:{}{}", key, space, value)
}

fn color_value(value: &str) -> String {
    let trimmed = value.trim();
    let lower = trimmed.to_lowercase();

    if matches!(trimmed, "[]" | "{}")
        || matches!(lower.as_str(), "~" | "null" | "nil" | "none")
        || matches!(lower.as_str(), "true" | "false" | "yes" | "no" | "on" | "off")
    {
        value.magenta().to_string()
    } else if NUMBER_RE.is_match(trimmed) {
        value.yellow().to_string()
    } else {
        value.green().to_string()
    }
}
