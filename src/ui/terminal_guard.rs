//! Raw mode and alternate screen for the toast host.

use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub type HostTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back on drop, or from the panic hook if the host
/// panics first. Restores at most once.
pub struct TerminalGuard {
    active: Arc<AtomicBool>,
}

fn restore_terminal(active: &AtomicBool) {
    if !active.swap(false, Ordering::SeqCst) {
        return;
    }
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(&self.active);
    }
}

/// Enter raw mode on the alternate screen with the cursor hidden.
pub fn setup_terminal() -> io::Result<(HostTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard {
        active: Arc::new(AtomicBool::new(true)),
    };

    let active = Arc::clone(&guard.active);
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal(&active);
        default_hook(info);
    }));

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
