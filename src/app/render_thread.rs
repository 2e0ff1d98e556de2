//! Background render thread.
//!
//! The thread owns the terminal and draws `AppState` snapshots sent from the
//! event loop, so a slow frame never delays key handling. A pending frame is
//! dropped when a newer one is not accepted; the next snapshot supersedes it.

use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::state::AppState;

enum Frame {
    Draw(Box<AppState>),
    Stop,
}

pub struct RenderThread {
    tx: SyncSender<Frame>,
    handle: Option<JoinHandle<()>>,
}

impl RenderThread {
    /// Spawn the thread. Terminal setup and teardown both happen on it.
    pub fn spawn() -> io::Result<Self> {
        let (tx, rx) = mpsc::sync_channel::<Frame>(1);

        let handle = thread::Builder::new()
            .name("render".to_string())
            .spawn(move || match setup_terminal() {
                Ok(mut terminal) => {
                    draw_frames(&mut terminal, rx);
                    restore_terminal(&mut terminal);
                }
                Err(e) => tracing::error!("Terminal setup failed: {}", e),
            })?;

        Ok(Self {
            tx,
            handle: Some(handle),
        })
    }

    /// Queue a snapshot without blocking. Returns false when a frame is still
    /// pending and this one was dropped.
    pub fn render(&self, state: AppState) -> bool {
        match self.tx.try_send(Frame::Draw(Box::new(state))) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                tracing::trace!("Render thread busy, skipping frame");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!("Render thread disconnected");
                true
            }
        }
    }

    /// Stop the thread and wait until the terminal is restored
    pub fn shutdown(mut self) {
        let _ = self.tx.send(Frame::Stop);
        if let Some(handle) = self.handle.take() {
            handle.join().ok();
        }
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode().ok();
        return Err(e);
    }
    Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| {
        disable_raw_mode().ok();
    })
}

fn draw_frames(terminal: &mut Terminal<CrosstermBackend<Stdout>>, rx: Receiver<Frame>) {
    while let Ok(Frame::Draw(state)) = rx.recv() {
        if let Err(e) = terminal.draw(|f| crate::ui::render(f, &state)) {
            tracing::error!("Render error: {}", e);
        }
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_reports_dropped_frame() {
        let (tx, rx) = mpsc::sync_channel::<Frame>(1);
        let thread = RenderThread { tx, handle: None };

        assert!(thread.render(AppState::default()));
        // Previous frame not yet drawn
        assert!(!thread.render(AppState::default()));

        assert!(matches!(rx.try_recv(), Ok(Frame::Draw(_))));
        assert!(thread.render(AppState::default()));
    }
}
