//! Formatting utilities used for CLI and export outputs.

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

pub const DEFAULT_DATE_FORMAT: &str = "%A, %B %-d, %Y";
pub const DEFAULT_TIME_FORMAT: &str = "%I:%M %p";

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern is valid")
});

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", " ".repeat(pad), s)
}

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Display width of `s` once ANSI escapes are removed.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// True if chrono accepts every specifier of `fmt`.
pub fn is_valid_format(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

/// Format with a user-supplied pattern, falling back to ISO on a bad pattern.
pub fn format_date(date: NaiveDate, fmt: &str) -> String {
    if is_valid_format(fmt) {
        date.format(fmt).to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}

pub fn format_time(ts: NaiveDateTime, fmt: &str) -> String {
    if is_valid_format(fmt) {
        ts.format(fmt).to_string()
    } else {
        ts.format("%H:%M").to_string()
    }
}

/// Encode text for the standard PDF fonts (WinAnsiEncoding). Latin-1 maps to
/// itself plus the common typographic punctuation; anything else becomes `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '\u{20ac}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            _ => b'?',
        })
        .collect()
}
