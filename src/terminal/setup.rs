//! Terminal mode transitions.

use std::io::Write;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Enter TUI mode: alternate screen and bracketed paste.
///
/// Raw mode is enabled separately by the caller before this.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> Result<()> {
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste)?;
    Ok(())
}

/// Leave TUI mode, restoring the terminal for the shell.
///
/// Infallible by design: cleanup runs in drop paths and panic hooks where
/// an error can only be ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = execute!(writer, DisableBracketedPaste, LeaveAlternateScreen, Show);
    let _ = disable_raw_mode();
    let _ = writer.flush();
}
