use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, ToastLevel, input, update};
use crate::catalog::Catalog;
use crate::remote::EmojiMapClient;
use crate::storage::Storage;

pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the markdown source cannot be read, the terminal
    /// cannot be initialized, or the event loop hits an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let storage = self
            .storage_dir
            .take()
            .map_or_else(Storage::open_default, Storage::open_at);
        let theme = self.theme_override.unwrap_or_else(|| storage.theme());

        let source = std::fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;

        // Fetch the emoji map BEFORE initializing the terminal, so any
        // proxy prompts or slow DNS happen on a normal screen. A failed
        // fetch still launches the app, with an empty grid and an error
        // toast; the guide pane works without the map.
        let fetch = EmojiMapClient::new(self.endpoint.clone()).load();
        let catalog = match &fetch {
            Ok(map) => Catalog::assemble(&source, map),
            Err(err) => {
                tracing::error!(%err, endpoint = %self.endpoint, "emoji map fetch failed");
                Catalog::assemble(&source, &crate::remote::EmojiMap::new())
            }
        };

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - mojigrid requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(
            self.file_path.clone(),
            source,
            catalog,
            theme,
            storage,
            self.endpoint.clone(),
            size.width,
            size.height,
        );
        model.guide_visible = self.guide_visible;
        model.relayout();
        if let Err(err) = fetch {
            model.show_toast(format!("Fetch failed: {err}"), ToastLevel::Error);
        }

        execute!(stdout(), EnableMouseCapture)?;
        let result = Self::event_loop(&mut terminal, &mut model);

        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let start = Instant::now();
        let mut resize_debouncer = ResizeDebouncer::new(100);
        let mut needs_render = true;

        loop {
            if model.expire_toast() {
                needs_render = true;
            }

            let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                Self::apply(model, Message::Resize(width, height));
                needs_render = true;
            }

            let poll_ms = if needs_render {
                0
            } else if resize_debouncer.is_pending() {
                10
            } else {
                250
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                // Refresh timestamp after the poll wait so the debouncer
                // uses accurate times.
                let event_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                if Self::dispatch(model, &event::read()?, event_ms, &mut resize_debouncer) {
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::from_millis(0))? {
                    let drain_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                    if Self::dispatch(model, &event::read()?, drain_ms, &mut resize_debouncer) {
                        needs_render = true;
                    }
                }
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Turn one terminal event into a model change. Resizes go through the
    /// debouncer instead of being applied immediately.
    fn dispatch(
        model: &mut Model,
        event: &Event,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> bool {
        if let Event::Resize(width, height) = event {
            resize_debouncer.queue(*width, *height, now_ms);
            return false;
        }
        let Some(msg) = input::handle_event(model, event) else {
            return false;
        };
        Self::apply(model, msg);
        true
    }

    fn apply(model: &mut Model, msg: Message) {
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        super::effects::handle_message_side_effects(model, &side_msg);
    }
}
