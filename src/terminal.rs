//! One-shot "typing" reveal of the terminal block
//!
//! The terminal markup is captured, cleared and then re-rendered a character
//! at a time with a blinking caret. Tags and entities are revealed whole so
//! every intermediate frame stays well-formed enough to render.

pub const CARET: &str = "<span class=\"cursor-blink\">|</span>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealFrame {
    /// Partial markup followed by the caret; schedule another step
    Partial(String),
    /// Full original markup; the reveal is over
    Done(String),
}

#[derive(Debug, Clone)]
pub struct TerminalReveal {
    source: String,
    /// Byte offset of the revealed prefix (always a char boundary)
    revealed: usize,
}

impl TerminalReveal {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            revealed: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.source.len()
    }

    pub fn next_frame(&mut self) -> RevealFrame {
        if self.is_done() {
            return RevealFrame::Done(self.source.clone());
        }
        self.revealed = self.next_boundary();
        RevealFrame::Partial(format!("{}{}", &self.source[..self.revealed], CARET))
    }

    fn next_boundary(&self) -> usize {
        let rest = &self.source[self.revealed..];
        let closing = match rest.chars().next() {
            Some('<') => Some('>'),
            Some('&') => Some(';'),
            _ => None,
        };
        if let Some(close) = closing {
            if let Some(end) = rest.find(close) {
                return self.revealed + end + close.len_utf8();
            }
        }
        let step = rest.chars().next().map(char::len_utf8).unwrap_or(0);
        self.revealed + step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(reveal: &mut TerminalReveal) -> Vec<RevealFrame> {
        let mut frames = Vec::new();
        loop {
            let frame = reveal.next_frame();
            let done = matches!(frame, RevealFrame::Done(_));
            frames.push(frame);
            if done {
                return frames;
            }
        }
    }

    #[test]
    fn test_reveals_plain_text_char_by_char() {
        let mut reveal = TerminalReveal::new("ls");
        let frames = run(&mut reveal);
        assert_eq!(
            frames,
            vec![
                RevealFrame::Partial(format!("l{}", CARET)),
                RevealFrame::Partial(format!("ls{}", CARET)),
                RevealFrame::Done("ls".into()),
            ]
        );
    }

    #[test]
    fn test_tags_and_entities_appear_whole() {
        let mut reveal = TerminalReveal::new("<b>a</b>&gt;");
        let frames = run(&mut reveal);
        assert_eq!(frames[0], RevealFrame::Partial(format!("<b>{}", CARET)));
        assert_eq!(frames[1], RevealFrame::Partial(format!("<b>a{}", CARET)));
        assert_eq!(frames[2], RevealFrame::Partial(format!("<b>a</b>{}", CARET)));
        assert_eq!(frames[3], RevealFrame::Partial(format!("<b>a</b>&gt;{}", CARET)));
        assert_eq!(frames[4], RevealFrame::Done("<b>a</b>&gt;".into()));
    }

    #[test]
    fn test_unclosed_tag_falls_back_to_chars() {
        let mut reveal = TerminalReveal::new("a<b");
        assert_eq!(reveal.next_frame(), RevealFrame::Partial(format!("a{}", CARET)));
        assert_eq!(reveal.next_frame(), RevealFrame::Partial(format!("a<{}", CARET)));
    }

    #[test]
    fn test_empty_source_is_done_immediately() {
        let mut reveal = TerminalReveal::new("");
        assert_eq!(reveal.next_frame(), RevealFrame::Done(String::new()));
    }

    #[test]
    fn test_multibyte_text() {
        let mut reveal = TerminalReveal::new("→ok");
        assert_eq!(reveal.next_frame(), RevealFrame::Partial(format!("→{}", CARET)));
    }
}
