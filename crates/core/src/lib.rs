//! Editing model for a terminal-style input line: a grapheme buffer with a
//! cursor, recallable history, the view projection drawn by the front end,
//! and the small persistence/config layer behind them.

pub mod buffer;
pub mod command;
pub mod config;
pub mod error;
pub mod history;
pub mod storage;
pub mod view;

pub use buffer::InputState;
pub use config::Config;
pub use error::{Error, Result};
pub use history::{HistoryStore, Recall};
pub use storage::Storage;
pub use view::CursorView;
