use std::{iter::Peekable, str::Chars};

/// Cursor over the source text with a one-character push-back buffer.
///
/// The scanner works peek-then-consume: a character is inspected without
/// consuming it, then consumed explicitly once it is known to belong to the
/// current token. The push-back buffer covers the one place that discipline
/// is not enough, the digit-dot-nondigit backtrack, where a consumed `.`
/// has to be returned to the stream. A pushed-back character fronts both
/// `peek` and `get`.
pub struct SourceStream<'a> {
    chars: Peekable<Chars<'a>>,
    pushed_back: Option<char>,
}

impl<'a> SourceStream<'a> {
    pub fn new(source: &'a str) -> SourceStream<'a> {
        SourceStream {
            chars: source.chars().peekable(),
            pushed_back: None,
        }
    }

    pub fn peek(&mut self) -> Option<char> {
        match self.pushed_back {
            Some(c) => Some(c),
            None => self.chars.peek().copied(),
        }
    }

    pub fn get(&mut self) -> Option<char> {
        match self.pushed_back.take() {
            Some(c) => Some(c),
            None => self.chars.next(),
        }
    }

    /// Returns a consumed character to the stream. Holds at most one
    /// character; pushing a second before the first is re-read loses it.
    pub fn push_back(&mut self, c: char) {
        self.pushed_back = Some(c);
    }

    pub fn at_eof(&mut self) -> bool {
        self.peek().is_none()
    }
}
