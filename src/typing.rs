//! Looping typewriter for the hero code block

use crate::consts::{DELETE_DELAY_MS, LINE_PAUSE_MS, TYPE_DELAY_MS};

/// Text to show and how long to wait before the next step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    lines: Vec<String>,
    line: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            line: 0,
            chars: 0,
            deleting: false,
        }
    }

    pub fn line_index(&self) -> usize {
        self.line
    }

    /// Advance by one character (typing or deleting)
    pub fn step(&mut self) -> TypingFrame {
        let Some(current) = self.lines.get(self.line) else {
            return TypingFrame {
                text: String::new(),
                delay_ms: LINE_PAUSE_MS,
            };
        };
        let len = current.chars().count();

        let mut delay_ms = if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            DELETE_DELAY_MS
        } else {
            self.chars = (self.chars + 1).min(len);
            TYPE_DELAY_MS
        };
        let text = char_prefix(current, self.chars).to_string();

        if !self.deleting && self.chars >= len {
            delay_ms = LINE_PAUSE_MS;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.line = (self.line + 1) % self.lines.len();
        }

        TypingFrame { text, delay_ms }
    }
}

/// First `n` characters of `s`, cut on a char boundary
pub fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn writer(lines: &[&str]) -> Typewriter {
        Typewriter::new(lines.iter().map(|s| s.to_string()).collect())
    }

    fn frame(text: &str, delay_ms: u32) -> TypingFrame {
        TypingFrame {
            text: text.into(),
            delay_ms,
        }
    }

    #[test]
    fn test_types_then_pauses_then_deletes() {
        let mut tw = writer(&["ab"]);
        assert_eq!(tw.step(), frame("a", 100));
        assert_eq!(tw.step(), frame("ab", 2000));
        assert_eq!(tw.step(), frame("a", 50));
        assert_eq!(tw.step(), frame("", 50));
        // Wrapped back to the only line
        assert_eq!(tw.line_index(), 0);
        assert_eq!(tw.step().text, "a");
    }

    #[test]
    fn test_advances_to_next_line() {
        let mut tw = writer(&["x", "yz"]);
        tw.step(); // "x", pause
        tw.step(); // "", next line
        assert_eq!(tw.line_index(), 1);
        assert_eq!(tw.step().text, "y");
    }

    #[test]
    fn test_empty_line_does_not_stall() {
        let mut tw = writer(&["", "k"]);
        assert_eq!(tw.step().delay_ms, 2000);
        tw.step();
        assert_eq!(tw.line_index(), 1);
    }

    #[test]
    fn test_no_lines() {
        let mut tw = Typewriter::new(Vec::new());
        assert_eq!(tw.step().text, "");
    }

    #[test]
    fn test_char_prefix_respects_multibyte() {
        assert_eq!(char_prefix("héllo", 2), "hé");
        assert_eq!(char_prefix("ab", 5), "ab");
    }

    proptest! {
        #[test]
        fn prop_frames_are_prefixes(line in "\\PC{0,24}", steps in 1usize..100) {
            let mut tw = Typewriter::new(vec![line.clone()]);
            for _ in 0..steps {
                let frame = tw.step();
                prop_assert!(line.starts_with(&frame.text));
            }
        }
    }
}
