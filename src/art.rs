//! Rendered character art.

use serde::Serialize;
use std::fmt;

/// The result of one conversion: an ordered list of equal-length lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AsciiArt {
    width: u32,
    height: u32,
    lines: Vec<String>,
}

impl AsciiArt {
    /// Assemble art from already-mapped lines.
    ///
    /// `width` is the character count of every line; the caller guarantees
    /// all lines share it.
    pub(crate) fn from_lines(width: u32, lines: Vec<String>) -> Self {
        debug_assert!(lines.iter().all(|l| l.chars().count() == width as usize));
        Self {
            width,
            height: lines.len() as u32,
            lines,
        }
    }

    /// Characters per line.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of lines.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain-text form: every line followed by a single `\n`.
    pub fn to_text(&self) -> String {
        let line_bytes: usize = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut text = String::with_capacity(line_bytes);
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text_terminates_each_line() {
        let art = AsciiArt::from_lines(2, vec!["ab".into(), "cd".into()]);
        assert_eq!(art.to_text(), "ab\ncd\n");
        assert_eq!(art.to_string(), art.to_text());
        assert_eq!(art.height(), 2);
    }

    #[test]
    fn test_empty_art() {
        let art = AsciiArt::from_lines(0, Vec::new());
        assert!(art.is_empty());
        assert_eq!(art.to_text(), "");
    }

    #[test]
    fn test_serializes_lines() {
        let art = AsciiArt::from_lines(1, vec!["#".into()]);
        let json = serde_json::to_value(&art).unwrap();
        assert_eq!(json["width"], 1);
        assert_eq!(json["lines"][0], "#");
    }
}
