use super::{App, Config};
use eframe::egui::{vec2, Button, Color32, RichText, Sense, Stroke, Ui};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str, fill: Color32) -> Button {
        Button::new(Self::new_text(text)).fill(fill).stroke(Stroke::new(
            Config::BUTTON_STROKE_WIDTH,
            Config::BUTTON_STROKE_COLOR,
        ))
    }

    fn draw_menu(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui
                .add(Self::new_button("Fill", Config::FILL_BUTTON_COLOR))
                .clicked()
            {
                self.fill();
            }

            if ui
                .add_enabled(
                    !self.is_playing,
                    Self::new_button("Next step", Config::STEP_BUTTON_COLOR),
                )
                .clicked()
            {
                self.advance();
            }

            let text = if self.is_playing { "Pause" } else { "Play" };
            if ui
                .add(Self::new_button(text, Config::PLAY_BUTTON_COLOR))
                .clicked()
            {
                self.toggle_playback();
            }

            if ui
                .add_enabled(
                    !self.is_playing,
                    Self::new_button("Clear", Config::CLEAR_BUTTON_COLOR),
                )
                .clicked()
            {
                self.field.clear();
            }

            ui.label(Self::new_text(&format!(
                "Generation: {}   Population: {}",
                self.field.generation(),
                self.field.population()
            )));
        });
    }

    fn draw_field(&mut self, ui: &mut Ui) {
        let (width, height) = self.field.size();
        let size = vec2(
            width as f32 * Config::CELL_SIZE,
            height as f32 * Config::CELL_SIZE,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let origin = response.rect.left_top();

        painter.rect_filled(response.rect, 0., Config::CANVAS_COLOR);

        let radius = Config::CELL_SIZE / 2. - Config::CELL_INSET;
        for row in 0..height {
            for col in 0..width {
                let center = origin
                    + vec2(
                        (col as f32 + 0.5) * Config::CELL_SIZE,
                        (row as f32 + 0.5) * Config::CELL_SIZE,
                    );
                let color = if self.field.get(row, col) {
                    Config::ALIVE_COLOR
                } else {
                    Config::DEAD_COLOR
                };
                painter.circle_filled(center, radius, color);
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let col = ((pos.x - origin.x) / Config::CELL_SIZE) as usize;
                let row = ((pos.y - origin.y) / Config::CELL_SIZE) as usize;
                self.toggle_cell(row, col);
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            self.draw_menu(ui);

            ui.add_space(Config::WIDGET_GAP);

            self.draw_field(ui);
        });
    }
}
