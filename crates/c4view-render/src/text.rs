//! Terminal-column text measurement and the truncate/center rules used by boxes.

pub mod icons;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

pub trait TextMeasurer {
    /// Width of `text` in terminal columns.
    fn width(&self, text: &str) -> usize;

    fn char_width(&self, ch: char) -> usize {
        let mut buf = [0u8; 4];
        self.width(ch.encode_utf8(&mut buf))
    }
}

/// East-Asian-width aware measurement (`👤` and CJK count as two columns).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWidthMeasurer;

impl TextMeasurer for UnicodeWidthMeasurer {
    fn width(&self, text: &str) -> usize {
        UnicodeWidthStr::width(text)
    }

    fn char_width(&self, ch: char) -> usize {
        UnicodeWidthChar::width(ch).unwrap_or(0)
    }
}

/// Counts scalar values; every character is one column.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharCountMeasurer;

impl TextMeasurer for CharCountMeasurer {
    fn width(&self, text: &str) -> usize {
        text.chars().count()
    }
}

/// Longest prefix of `text` that fits in `max` columns.
pub fn take_width<'a>(text: &'a str, max: usize, measurer: &dyn TextMeasurer) -> &'a str {
    let mut used = 0usize;
    for (idx, ch) in text.char_indices() {
        let w = measurer.char_width(ch);
        if used + w > max {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// Returns `text` unchanged when it fits in `max` columns, otherwise its first `max - 3`
/// columns followed by `...`.
pub fn truncate_with_ellipsis(text: &str, max: usize, measurer: &dyn TextMeasurer) -> String {
    if measurer.width(text) <= max {
        return text.to_string();
    }
    let head = take_width(text, max.saturating_sub(ELLIPSIS.len()), measurer);
    format!("{head}{ELLIPSIS}")
}

/// Pads `text` to `width` columns, extra space going right when the split is uneven.
pub fn center(text: &str, width: usize, measurer: &dyn TextMeasurer) -> String {
    let len = measurer.width(text);
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(left + len);
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

#[cfg(test)]
mod tests;
