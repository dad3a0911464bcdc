use unicode_segmentation::UnicodeSegmentation;

use crate::buffer::InputState;

/// Non-breaking space. Stands in for every literal space, and for the empty
/// cell under a cursor parked at the end of the line.
pub const NBSP: char = '\u{00A0}';

/// Immutable projection of an [`InputState`]: text before the cursor, the
/// glyph under it, and the text after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CursorView {
    pub before: String,
    pub on: String,
    pub after: String,
    /// The block blinks only while the input has focus.
    pub blinking: bool,
}

fn hard_spaces(s: &str) -> String {
    s.replace(' ', "\u{00A0}")
}

impl CursorView {
    pub fn from_state(state: &InputState) -> Self {
        let graphemes: Vec<&str> = state.text().graphemes(true).collect();
        let pos = state.position().min(graphemes.len());
        let before = hard_spaces(&graphemes[..pos].concat());
        let (on, after) = match graphemes.get(pos) {
            Some(g) => (hard_spaces(g), hard_spaces(&graphemes[pos + 1..].concat())),
            None => (NBSP.to_string(), String::new()),
        };
        Self {
            before,
            on,
            after,
            blinking: state.is_focused(),
        }
    }
}
