use unicode_segmentation::UnicodeSegmentation;

/// The live, uncommitted input line and its insertion point.
///
/// `position` counts grapheme clusters, not bytes, and always stays within
/// `0..=len()`. Every mutator returns `true` when it changed the state so the
/// caller knows a redraw is due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputState {
    text: String,
    position: usize,
    focused: bool,
    typed: Option<Typed>,
}

// The char inserted by the last operation. A backspace right after it removes
// exactly that char, even when it merged into a neighbouring cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Typed {
    at: usize,
    len: usize,
    position: usize,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            text: String::new(),
            position: 0,
            focused: true,
            typed: None,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.text.graphemes(true).count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) -> bool {
        let changed = self.focused != focused;
        self.focused = focused;
        changed
    }

    // Byte offset of the grapheme at `idx`, or the end of the text.
    fn byte_offset(&self, idx: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        let at = self.byte_offset(self.position);
        self.text.insert(at, c);
        self.typed = Some(Typed {
            at,
            len: c.len_utf8(),
            position: self.position,
        });
        // The cursor lands after the cluster holding `c`, which is not
        // always a fresh one: combining marks and joiners merge.
        let end = at + c.len_utf8();
        self.position = self
            .text
            .grapheme_indices(true)
            .take_while(|(i, _)| *i < end)
            .count();
        true
    }

    pub fn delete_before(&mut self) -> bool {
        if let Some(t) = self.typed.take() {
            self.text.replace_range(t.at..t.at + t.len, "");
            self.position = t.position;
            return true;
        }
        if self.position == 0 {
            return false;
        }
        let start = self.byte_offset(self.position - 1);
        let end = self.byte_offset(self.position);
        self.text.replace_range(start..end, "");
        self.position -= 1;
        true
    }

    pub fn delete_at(&mut self) -> bool {
        self.typed = None;
        if self.position >= self.len() {
            return false;
        }
        let start = self.byte_offset(self.position);
        let end = self.byte_offset(self.position + 1);
        self.text.replace_range(start..end, "");
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.typed = None;
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        self.typed = None;
        if self.position >= self.len() {
            return false;
        }
        self.position += 1;
        true
    }

    pub fn move_to_start(&mut self) -> bool {
        self.typed = None;
        let changed = self.position != 0;
        self.position = 0;
        changed
    }

    pub fn move_to_end(&mut self) -> bool {
        self.typed = None;
        let end = self.len();
        let changed = self.position != end;
        self.position = end;
        changed
    }

    /// Replaces the whole line and parks the cursor after the last grapheme.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        self.typed = None;
        self.text = text.into();
        self.position = self.len();
        true
    }

    /// Empties the buffer and hands back what was in it.
    pub fn take(&mut self) -> String {
        self.typed = None;
        self.position = 0;
        std::mem::take(&mut self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(text: &str, position: usize) -> InputState {
        let mut s = InputState::new();
        s.set_text(text);
        s.position = position;
        s
    }

    #[test]
    fn edit_scenario_from_middle_of_line() {
        let mut s = state("ls -la", 2);
        s.move_left();
        assert_eq!(s.position(), 1);
        s.insert_char('x');
        assert_eq!(s.text(), "lxs -la");
        assert_eq!(s.position(), 2);
        s.delete_before();
        assert_eq!(s.text(), "ls -la");
        assert_eq!(s.position(), 1);
    }

    #[test]
    fn insert_then_delete_before_is_identity() {
        let texts = [
            "hello",
            "a\u{301}b\u{308}",
            "\u{301}x",
            "👨\u{200d}👩\u{200d}👧 ok",
            "漢字かな",
            "🇺🇸🇫🇷",
        ];
        let chars = ['z', '\u{301}', '\u{200d}', '漢', '🇫', ' '];
        for text in texts {
            let len = state(text, 0).len();
            for pos in 0..=len {
                for c in chars {
                    let mut s = state(text, pos);
                    let before = s.clone();
                    s.insert_char(c);
                    assert!(s.position() <= s.len(), "{text:?} @ {pos} + {c:?}");
                    s.delete_before();
                    assert_eq!(s, before, "{text:?} @ {pos} + {c:?}");
                }
            }
        }
    }

    #[test]
    fn combining_mark_typed_mid_line() {
        let mut s = state("ab", 1);
        s.insert_char('\u{301}');
        assert_eq!(s.text(), "a\u{301}b");
        // cursor stays between the accented "a" and "b"
        assert_eq!(s.position(), 1);
        s.delete_before();
        assert_eq!(s.text(), "ab");
        assert_eq!(s.position(), 1);
    }

    #[test]
    fn base_typed_before_leading_mark_keeps_cursor_after_it() {
        let mut s = state("\u{301}", 0);
        s.insert_char('e');
        assert_eq!(s.text(), "e\u{301}");
        assert_eq!(s.position(), 1);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn backspace_after_a_move_removes_whole_cluster() {
        let mut s = state("ab", 1);
        s.insert_char('\u{301}');
        s.move_right();
        s.move_left();
        s.delete_before();
        assert_eq!(s.text(), "b");
        assert_eq!(s.position(), 0);
    }

    #[test]
    fn moves_stay_in_bounds() {
        let mut s = state("abc", 0);
        assert!(!s.move_left());
        assert_eq!(s.position(), 0);
        for _ in 0..10 {
            s.move_right();
        }
        assert_eq!(s.position(), 3);
        for _ in 0..10 {
            s.move_left();
        }
        assert_eq!(s.position(), 0);
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut s = state("abc", 3);
        assert!(!s.delete_at());
        assert!(!s.delete_at());
        assert_eq!(s.text(), "abc");
        assert_eq!(s.position(), 3);
    }

    #[test]
    fn delete_at_removes_under_cursor() {
        let mut s = state("abc", 1);
        assert!(s.delete_at());
        assert_eq!(s.text(), "ac");
        assert_eq!(s.position(), 1);
    }

    #[test]
    fn delete_before_at_start_is_noop() {
        let mut s = state("abc", 0);
        assert!(!s.delete_before());
        assert_eq!(s.text(), "abc");
    }

    #[test]
    fn start_and_end() {
        let mut s = state("echo hi", 3);
        s.move_to_start();
        assert_eq!(s.position(), 0);
        s.move_to_end();
        assert_eq!(s.position(), 7);
    }

    #[test]
    fn cursor_steps_over_whole_graphemes() {
        // "e" + combining acute, then a family emoji
        let mut s = state("e\u{301}👨‍👩‍👧", 0);
        assert_eq!(s.len(), 2);
        s.move_right();
        s.delete_at();
        assert_eq!(s.text(), "e\u{301}");
        s.delete_before();
        assert!(s.is_empty());
        assert_eq!(s.position(), 0);
    }

    #[test]
    fn take_clears_buffer() {
        let mut s = state("pwd", 3);
        assert_eq!(s.take(), "pwd");
        assert!(s.is_empty());
        assert_eq!(s.position(), 0);
    }
}
