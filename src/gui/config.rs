use eframe::egui::Color32;
use std::time::Duration;

pub struct Config;

impl Config {
    pub const GRID_WIDTH: usize = 16;
    pub const GRID_HEIGHT: usize = 16;
    pub const CELL_SIZE: f32 = 40.;
    pub const FILL_COUNT: usize = 80;
    pub const STEP_INTERVAL: Duration = Duration::from_millis(200);

    pub const FRAME_MARGIN: f32 = 5.;
    pub const MENU_HEIGHT: f32 = 40.;
    pub const WIDGET_GAP: f32 = 5.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 1.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;

    pub const WINDOW_FILL: Color32 = Color32::from_rgb(135, 206, 235); // sky blue
    pub const CANVAS_COLOR: Color32 = Color32::from_rgb(255, 248, 220); // cornsilk
    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(124, 252, 0); // lawn green
    pub const DEAD_COLOR: Color32 = Color32::from_rgb(255, 228, 196); // bisque
    pub const FILL_BUTTON_COLOR: Color32 = Color32::from_rgb(0, 255, 255); // cyan
    pub const STEP_BUTTON_COLOR: Color32 = Color32::from_rgb(173, 255, 47); // green yellow
    pub const PLAY_BUTTON_COLOR: Color32 = Color32::from_rgb(255, 215, 0); // gold
    pub const CLEAR_BUTTON_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const CELL_INSET: f32 = 2.;
}
