use super::Config;
use crate::LifeField;
use eframe::egui::{CentralPanel, Context, Frame, Margin};
use std::time::Instant;

pub struct App {
    pub(super) field: LifeField,           // Game of Life field.
    pub(super) is_playing: bool,           // Auto-play is running.
    pub(super) last_step: Instant,         // When auto-play last stepped.
}

impl App {
    pub fn new() -> Self {
        Self {
            field: LifeField::blank(Config::GRID_WIDTH, Config::GRID_HEIGHT),
            is_playing: false,
            last_step: Instant::now(),
        }
    }

    pub(super) fn fill(&mut self) {
        match self.field.randomize(None, Config::FILL_COUNT) {
            Ok(seeded) => log::info!("seeded {} cells: {:?}", seeded.len(), seeded),
            Err(err) => log::warn!("{err}"),
        }
    }

    pub(super) fn advance(&mut self) {
        self.field.step();
        log::debug!("generation {}", self.field.generation());
    }

    pub(super) fn toggle_playback(&mut self) {
        if self.is_playing {
            self.is_playing = false;
        } else if self.field.is_changed() {
            // a settled field has nothing left to play
            self.is_playing = true;
            self.last_step = Instant::now();
        }
    }

    pub(super) fn toggle_cell(&mut self, row: usize, col: usize) {
        match self.field.toggle(row, col) {
            Ok(alive) => log::debug!(
                "cell ({row}, {col}) toggled {}",
                if alive { "alive" } else { "dead" }
            ),
            Err(err) => log::warn!("{err}"),
        }
    }

    /// One auto-play tick: step once per elapsed interval, stop once the
    /// field settles.
    fn update_playback(&mut self) {
        if !self.is_playing || self.last_step.elapsed() < Config::STEP_INTERVAL {
            return;
        }
        self.advance();
        self.last_step = Instant::now();
        if !self.field.is_changed() {
            self.is_playing = false;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::WINDOW_FILL),
            )
            .show(ctx, |ui| {
                self.update_playback();

                self.draw(ui);
            });

        if self.is_playing {
            ctx.request_repaint_after(Config::STEP_INTERVAL);
        }
    }
}
