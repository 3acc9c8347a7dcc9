use std::str::Chars;

#[derive(Clone)]
pub struct Cursor<'a> {
    chars: Chars<'a>,
    ln: u64,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        let chars = s.chars();
        Self { chars, ln: 1 }
    }

    pub fn get_line(&self) -> u64 {
        self.ln
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    pub fn peek_2nd(&self) -> Option<char> {
        // cheap to clone
        let mut chars = self.chars.clone();
        chars.next();
        chars.next()
    }

    #[inline]
    pub fn skip_if(&mut self, p: impl FnOnce(char) -> bool) -> bool {
        let skipped = self.peek().filter(|&c| p(c)).is_some();
        if skipped {
            self.take();
        }
        skipped
    }

    pub fn skip_whitespaces(&mut self) {
        while self.skip_if(char::is_whitespace) {}
    }

    /// Skips up to, but not including, the next newline.
    pub fn skip_line(&mut self) {
        while self.skip_if(|c| c != '\n') {}
    }

    pub fn skip_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.take().is_none() {
                break;
            }
        }
    }

    pub fn take_while(&mut self, p: impl Fn(char) -> bool) -> String {
        let mut buf = String::new();
        while let Some(c) = self.peek().filter(|&c| p(c)) {
            buf.push(c);
            self.take();
        }
        buf
    }

    pub fn take(&mut self) -> Option<char> {
        let next = self.chars.next();
        if next == Some('\n') {
            self.ln += 1;
        }
        next
    }
}
