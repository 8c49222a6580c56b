#![warn(clippy::all)]

fn main() {
    use eframe::egui::{vec2, ViewportBuilder};
    use life::Config;

    env_logger::init();

    let canvas = vec2(
        Config::GRID_WIDTH as f32 * Config::CELL_SIZE,
        Config::GRID_HEIGHT as f32 * Config::CELL_SIZE,
    );
    let inner_size = canvas
        + vec2(
            2. * Config::FRAME_MARGIN,
            2. * Config::FRAME_MARGIN + Config::MENU_HEIGHT,
        );

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(inner_size)
            .with_resizable(false),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(life::App::new()))),
    )
    .unwrap();
}
