//! Application core - owns state, dispatches input, and drives the form

mod actions;
mod event_loop;
pub mod render_thread;
pub mod session;
pub mod state;

use anyhow::Result;

use render_thread::RenderThread;

use crate::ai::OpenAiClient;
use crate::config::Config;
use crate::input::KeyBindings;
use crate::prompt::FieldSet;
use state::AppState;

pub struct App {
    pub(crate) config: Config,
    pub(crate) state: AppState,
    pub(crate) bindings: KeyBindings,
    pub(crate) client: OpenAiClient,
    /// Dirty flag: when true, UI needs re-render. Skips renders when nothing changed.
    pub(crate) dirty: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let client = OpenAiClient::new(&config.completion)?;
        let bindings = KeyBindings::new(&config.ui.keybinding_mode);
        let state = AppState::new(Self::initial_fields(&config));

        Ok(Self {
            config,
            state,
            bindings,
            client,
            dirty: true, // Start dirty for initial render
        })
    }

    /// Field values the form starts with (and returns to on reset)
    fn initial_fields(config: &Config) -> FieldSet {
        FieldSet::form_defaults(config.form.tone, config.form.temperature)
    }

    pub async fn run(&mut self) -> Result<()> {
        // Spawn background render thread (owns terminal setup/teardown)
        let render_thread = RenderThread::spawn()?;

        self.state
            .set_status("Fill in the form, then Ctrl+G to create the prompt");

        let result = self.event_loop(&render_thread).await;

        // Shutdown render thread (handles terminal cleanup)
        render_thread.shutdown();

        result
    }
}
