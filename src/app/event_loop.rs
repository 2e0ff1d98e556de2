//! Main event loop

use anyhow::Result;
use crossterm::event;
use std::time::Duration;

use crate::constants::INPUT_POLL_MS;
use crate::input::{Action, InputResult, handle_input};

use super::App;
use super::render_thread::RenderThread;

impl App {
    pub(crate) async fn event_loop(&mut self, render_thread: &RenderThread) -> Result<()> {
        loop {
            // Clear expired errors
            if self.state.status.clear_error_if_expired() {
                self.dirty = true;
            }

            // Render only when dirty (non-blocking - sends to render thread).
            // A dropped frame keeps the flag so it is retried on the next pass.
            if self.dirty && render_thread.render(self.state.clone()) {
                self.dirty = false;
            }

            if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
                continue;
            }

            let evt = event::read()?;
            // Any input event (including resize) requires re-render
            self.dirty = true;
            match handle_input(evt, &self.state, &self.bindings) {
                InputResult::Quit => break,
                InputResult::Action(Action::SubmitPrompt) => {
                    // The call blocks this handler; show progress before it starts
                    if self.begin_submit() {
                        // Best effort; the post-submit frame follows either way
                        render_thread.render(self.state.clone());
                        self.submit_prompt().await;
                    }
                }
                InputResult::Action(action) => self.handle_action(action),
                InputResult::Char(c) => self.handle_char(c),
                InputResult::Backspace => self.handle_backspace(),
                InputResult::Continue => {}
            }
        }

        Ok(())
    }
}
