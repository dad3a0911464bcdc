use console_core::Recall;
use tracing::{debug, error};

use super::{App, Entry};

impl App {
    // Record input text to history unless it repeats the last entry, then persist.
    pub fn record_history_entry(&mut self, text: &str) {
        if self.config.dedupe_consecutive && self.history.last() == Some(text) {
            self.history.reset_browse();
            return;
        }
        self.history.push(text);
        self.save_history();
    }

    pub fn save_history(&mut self) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = storage.save_list(&self.config.history_slot, self.history.entries()) {
            error!(target: "tui", "history save failed: {}", e);
            self.transcript.push(Entry::Error(format!("[error] {}", e)));
        }
    }

    pub fn recall_older(&mut self) {
        if let Some(line) = self.history.recall_older(self.input.text()) {
            let line = line.to_string();
            self.input.set_text(line);
        }
        debug!(target: "tui", "history: older -> {:?}", self.history.browse_index());
    }

    pub fn recall_newer(&mut self) {
        match self.history.recall_newer() {
            Some(Recall::Entry(line)) => {
                let line = line.to_string();
                self.input.set_text(line);
            }
            Some(Recall::Draft(draft)) => {
                self.input.set_text(draft);
            }
            None => {}
        }
        debug!(target: "tui", "history: newer -> {:?}", self.history.browse_index());
    }
}
