//! Text and date presentation helpers shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend hands out plain `YYYY-MM-DD` dates and naive ISO timestamps.
//! These helpers render them the way Korean locale formatting does
//! (`2025년 1월 15일`, `2025. 01. 15. 오후 03:30`) without depending on the
//! browser's `Intl` support, so SSR and hydrate produce identical markup.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

/// Default preview length for notice cards.
pub const PREVIEW_CHARS: usize = 150;

/// Escape text for safe insertion into HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Escape text and turn newlines into `<br>` for chat bubbles.
pub fn text_to_html(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

/// Render a `YYYY-MM-DD` date as `YYYY년 M월 D일`.
///
/// Unparseable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let head = trimmed.get(..10).unwrap_or(trimmed);
    match Date::parse(head, format_description!("[year]-[month]-[day]")) {
        Ok(date) => format!("{}년 {}월 {}일", date.year(), u8::from(date.month()), date.day()),
        Err(_) => raw.to_owned(),
    }
}

/// Render an ISO timestamp as `YYYY. MM. DD. 오전|오후 hh:mm`.
///
/// Fractional seconds and offsets after the first 19 characters are ignored.
/// Unparseable input is returned unchanged.
pub fn format_date_time(raw: &str) -> String {
    let trimmed = raw.trim();
    let head = trimmed.get(..19).unwrap_or(trimmed);
    match PrimitiveDateTime::parse(head, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]")) {
        Ok(dt) => format!(
            "{}. {:02}. {:02}. {}",
            dt.year(),
            u8::from(dt.month()),
            dt.day(),
            format_clock(dt.hour(), dt.minute())
        ),
        Err(_) => raw.to_owned(),
    }
}

/// Twelve-hour clock with Korean meridiem, e.g. `오후 03:07`.
pub fn format_clock(hour: u8, minute: u8) -> String {
    let meridiem = if hour < 12 { "오전" } else { "오후" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{meridiem} {hour12:02}:{minute:02}")
}

/// Truncate to `max_chars` characters, appending `...` when cut.
pub fn preview(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &content[..idx]),
        None => content.to_owned(),
    }
}

/// File name for a downloaded notice: anything outside ASCII alphanumerics
/// and Hangul syllables becomes `_`.
pub fn notice_filename(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || ('가'..='힣').contains(&c) { c } else { '_' })
        .collect();
    format!("{stem}.txt")
}

/// Title and body joined the way notices are copied and downloaded.
pub fn notice_text(title: &str, content: &str) -> String {
    format!("{title}\n\n{content}")
}
