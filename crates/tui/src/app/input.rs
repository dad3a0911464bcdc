use super::App;

// Editing a recalled line makes it the live line, so browsing ends here.
impl App {
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.history.reset_browse();
        self.input.insert_char(c);
    }

    pub fn delete_before(&mut self) {
        if self.input.delete_before() {
            self.history.reset_browse();
        }
    }

    pub fn delete_at(&mut self) {
        if self.input.delete_at() {
            self.history.reset_browse();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::{app_with, type_str};

    #[test]
    fn editing_a_recalled_line_ends_browsing() {
        let mut app = app_with(&["cd /tmp", "ls -la"]);
        app.recall_older();
        assert_eq!(app.history.browse_index(), Some(1));
        type_str(&mut app, "h");
        assert_eq!(app.history.browse_index(), None);
        assert_eq!(app.input.text(), "ls -lah");
    }

    #[test]
    fn noop_delete_keeps_browsing() {
        let mut app = app_with(&["pwd"]);
        app.recall_older();
        app.delete_at();
        assert_eq!(app.history.browse_index(), Some(0));
        app.delete_before();
        assert_eq!(app.history.browse_index(), None);
        assert_eq!(app.input.text(), "pw");
    }

    #[test]
    fn control_characters_are_dropped() {
        let mut app = app_with(&[]);
        app.insert_char('\u{7}');
        app.insert_char('\t');
        assert!(app.input.is_empty());
    }
}
