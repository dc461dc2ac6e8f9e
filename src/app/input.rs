/// Single-line text buffer with a byte-offset cursor that always sits on a
/// char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the contents and park the cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Hand back the contents, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let start = prev_char_boundary(&self.text, self.cursor);
            self.text.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            let end = next_char_boundary(&self.text, self.cursor);
            self.text.drain(self.cursor..end);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = prev_char_boundary(&self.text, self.cursor);
    }

    pub fn move_right(&mut self) {
        self.cursor = next_char_boundary(&self.text, self.cursor);
    }

    pub fn move_word_left(&mut self) {
        self.cursor = prev_word_start(&self.text, self.cursor);
    }

    pub fn move_word_right(&mut self) {
        self.cursor = next_word_start(&self.text, self.cursor);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_to_start(&mut self) {
        self.text.drain(..self.cursor);
        self.cursor = 0;
    }

    pub fn delete_to_end(&mut self) {
        self.text.truncate(self.cursor);
    }

    pub fn delete_word_back(&mut self) {
        let start = prev_word_start(&self.text, self.cursor);
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Text before and after the cursor, for rendering a caret between them.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.cursor)
    }
}

fn prev_char_boundary(s: &str, byte_index: usize) -> usize {
    s[..byte_index]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(s: &str, byte_index: usize) -> usize {
    s[byte_index..]
        .chars()
        .next()
        .map(|c| byte_index + c.len_utf8())
        .unwrap_or(s.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn prev_word_start(s: &str, byte_index: usize) -> usize {
    let chars: Vec<(usize, char)> = s[..byte_index].char_indices().collect();
    let mut pos = chars.len();
    while pos > 0 && !is_word_char(chars[pos - 1].1) {
        pos -= 1;
    }
    while pos > 0 && is_word_char(chars[pos - 1].1) {
        pos -= 1;
    }
    chars.get(pos).map(|(i, _)| *i).unwrap_or(byte_index)
}

fn next_word_start(s: &str, byte_index: usize) -> usize {
    let mut iter = s[byte_index..].char_indices().peekable();
    while let Some((_, c)) = iter.peek() {
        if !is_word_char(*c) {
            break;
        }
        iter.next();
    }
    while let Some((_, c)) = iter.peek() {
        if is_word_char(*c) {
            break;
        }
        iter.next();
    }
    iter.peek().map(|(i, _)| byte_index + i).unwrap_or(s.len())
}
