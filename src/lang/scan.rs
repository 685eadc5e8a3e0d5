use super::token::Token;

fn is_forth_whitespace(b: u8) -> bool {
    b == b'\t' || b == b'\n' || b == b' '
}

/// ## Source scanner
///
/// Splits the source into whitespace-delimited tokens, classifying each
/// as an integer literal or a word name. `head` marks the start of the
/// current scan and only ever advances; `tail` is the length of the
/// token under scan.
#[derive(Debug)]
pub struct Scanner<'a> {
    source: &'a str,
    head: usize,
    tail: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            head: 0,
            tail: 0,
        }
    }

    /// Scans the next token, or `None` when the source is exhausted.
    pub fn word(&mut self) -> Option<Token> {
        self.skip_white();
        if self.head >= self.source.len() {
            return None;
        }
        self.find_white();
        let slice = &self.source[self.head..self.head + self.tail];
        let token = Token::from_slice(slice);
        self.head += self.tail;
        self.tail = 0;
        Some(token)
    }

    /// True iff any non-whitespace character remains.
    pub fn more_tokens(&self) -> bool {
        self.source.as_bytes()[self.head..]
            .iter()
            .any(|&b| !is_forth_whitespace(b))
    }

    pub fn head(&self) -> usize {
        self.head
    }

    fn skip_white(&mut self) {
        let bytes = self.source.as_bytes();
        while self.head < bytes.len() && is_forth_whitespace(bytes[self.head]) {
            self.head += 1;
        }
    }

    fn find_white(&mut self) {
        let bytes = self.source.as_bytes();
        while self.head + self.tail < bytes.len()
            && !is_forth_whitespace(bytes[self.head + self.tail])
        {
            self.tail += 1;
        }
    }
}
