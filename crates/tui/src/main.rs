mod app;
mod events;
mod logging;
mod strings;
mod terminal;
mod theme;
mod ui;

use anyhow::Result;
use console_core::Config;
use terminal::TerminalGuard;
use tracing::{info, warn};

fn main() -> Result<()> {
    let (config, config_err) = match Config::from_env_and_file() {
        Ok(c) => (c, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let storage = config.storage();
    let log_dir = match &storage {
        Ok(st) => st.dir().join("logs"),
        Err(_) => std::env::temp_dir().join(console_core::storage::APP_DIR),
    };
    let _log_guard = logging::init_or_warn(&log_dir);
    if let Some(e) = config_err {
        warn!(target: "tui", "config ignored, using defaults: {}", e);
    }
    let storage = match storage {
        Ok(st) => Some(st),
        Err(e) => {
            warn!(target: "tui", "history will not be saved: {}", e);
            None
        }
    };
    info!(target: "tui", "starting, log dir {}", log_dir.display());

    let mut app = app::App::new(config, storage);
    let mut term = TerminalGuard::new()?;
    events::run(&mut term.terminal, &mut app)
}
