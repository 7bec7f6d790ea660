/// 한 줄 텍스트 입력 (커서는 바이트 인덱스)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor_pos: usize,
}

impl TextInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }

        let prev = prev_char_start(&self.value, self.cursor_pos);
        self.value.remove(prev);
        self.cursor_pos = prev;
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.value.len() {
            self.value.remove(self.cursor_pos);
        }
    }

    pub fn left(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }

        self.cursor_pos = prev_char_start(&self.value, self.cursor_pos);
    }

    pub fn right(&mut self) {
        if self.cursor_pos >= self.value.len() {
            return;
        }

        self.cursor_pos = self.value[self.cursor_pos..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor_pos + i)
            .unwrap_or(self.value.len());
    }

    pub fn home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn end(&mut self) {
        self.cursor_pos = self.value.len();
    }

    /// 커서 앞 단어 삭제 (Ctrl+W)
    pub fn delete_prev_word(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }

        let original = self.cursor_pos;
        let mut pos = original;

        // 1) 커서 왼쪽의 구분자들을 먼저 건너뜀
        while pos > 0 {
            let prev = prev_char_start(&self.value, pos);
            let ch = self.value[prev..pos].chars().next().unwrap_or_default();
            if is_word_delimiter(ch) {
                pos = prev;
            } else {
                break;
            }
        }

        // 2) 실제 단어 시작까지 이동
        while pos > 0 {
            let prev = prev_char_start(&self.value, pos);
            let ch = self.value[prev..pos].chars().next().unwrap_or_default();
            if is_word_delimiter(ch) {
                break;
            }
            pos = prev;
        }

        self.value.replace_range(pos..original, "");
        self.cursor_pos = pos;
    }
}

fn prev_char_start(value: &str, cursor_pos: usize) -> usize {
    value[..cursor_pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn is_word_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '/' | '\\' | ',' | '.' | '_' | '-')
}

#[cfg(test)]
pub(crate) mod tests {
    use super::TextInput;

    pub(crate) fn typed(text: &str) -> TextInput {
        let mut input = TextInput::default();
        text.chars().for_each(|c| input.insert_char(c));
        input
    }

    #[test]
    fn test_insert_backspace_delete_utf8_cursor_boundary() {
        let mut input = typed("\u{AC00}\u{B098}");
        input.left();

        input.insert_char('\u{B2E4}');
        assert_eq!(input.value(), "\u{AC00}\u{B2E4}\u{B098}");
        assert_eq!(input.cursor_pos(), "\u{AC00}\u{B2E4}".len());

        input.backspace();
        assert_eq!(input.value(), "\u{AC00}\u{B098}");

        input.home();
        input.delete();
        assert_eq!(input.value(), "\u{B098}");
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_left_right_home_end() {
        let mut input = typed("a\u{AC00}b");

        input.left();
        assert_eq!(input.cursor_pos(), "a\u{AC00}".len());
        input.left();
        assert_eq!(input.cursor_pos(), "a".len());
        input.right();
        assert_eq!(input.cursor_pos(), "a\u{AC00}".len());
        input.home();
        assert_eq!(input.cursor_pos(), 0);
        input.end();
        assert_eq!(input.cursor_pos(), input.value().len());
    }

    #[test]
    fn test_delete_prev_word_stops_at_comma() {
        let mut input = typed("invoice,report");

        input.delete_prev_word();

        assert_eq!(input.value(), "invoice,");
        assert_eq!(input.cursor_pos(), input.value().len());
    }
}
