// Centralized UI strings and labels. ASCII-friendly by default.

use unicode_width::UnicodeWidthStr;

pub const TITLE_OUTPUT: &str = " Console ";
pub const TITLE_INPUT: &str = " Input ";

pub const PREFIX_INPUT: &str = "> ";

// Build the status bar line with width-aware compaction.
// - col_disp: 1-based cursor column
// - history_len: number of stored entries
// - browse: Some(0-based index) while a history entry is shown
// - focused: whether the input currently owns the keyboard
pub fn build_status_line(
    col_disp: usize,
    history_len: usize,
    browse: Option<usize>,
    focused: bool,
    max_width: u16,
) -> String {
    let mut segments: Vec<String> = Vec::new();
    segments.push(format!(
        "[{}] C{}",
        if focused { "Input" } else { "Blurred" },
        col_disp
    ));
    segments.push(match browse {
        Some(i) => format!("Hist:{}/{}", i + 1, history_len),
        None => format!("Hist:{}", history_len),
    });
    // Hints ordered by importance; will be appended if space allows.
    let hints: [&str; 4] = [
        "Enter: submit",
        "Shift+Up/Down: history",
        "Up/Down: start/end",
        "Esc: quit",
    ];
    for h in hints {
        segments.push(h.to_string());
    }

    let sep = "  |  ";
    let mut out = String::new();
    let mut used = 0usize;
    for (i, seg) in segments.iter().enumerate() {
        let segw = UnicodeWidthStr::width(seg.as_str());
        let addw = segw
            + if i == 0 {
                0
            } else {
                UnicodeWidthStr::width(sep)
            };
        if used + addw > max_width as usize {
            break;
        }
        if i > 0 {
            out.push_str(sep);
            used += UnicodeWidthStr::width(sep);
        }
        out.push_str(seg);
        used += segw;
    }
    out
}
