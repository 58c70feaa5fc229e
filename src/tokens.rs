use std::iter::Peekable;
use std::str::SplitWhitespace;

/// Shared cursor over the words of a network description.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    inner: Peekable<SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace().peekable(),
        }
    }

    /// Consumes the next token only if it parses as a number.
    pub fn next_travel_time(&mut self) -> Option<f32> {
        let value = self
            .inner
            .peek()
            .and_then(|token| token.parse::<f32>().ok())?;

        self.inner.next();

        Some(value)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
