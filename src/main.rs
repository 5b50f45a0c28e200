use std::time::Duration;

use log::info;
use macroquad::prelude::*;
use life_canvas::{
    GameState, InputEvent, SetupError, Settings,
    config,
    rendering::{self, MacroquadCanvas},
    input, setup, ui,
};

fn window_conf() -> Conf {
    config::grid_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = run().await {
        match err {
            // No logger to report through
            SetupError::Logger(_) => eprintln!("life_canvas: {err}"),
            _ => log::error!("life_canvas: {err}"),
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<(), SetupError> {
    setup::init_logging()?;
    let settings = Settings::default();
    settings.validate()?;
    setup::surface_size()?;

    let (w, h) = settings.grid_dimensions();
    info!(
        "starting life_canvas v{}: {}x{} cells, pattern {}",
        env!("CARGO_PKG_VERSION"),
        w,
        h,
        settings.initial_pattern
    );

    let mut state = GameState::new(settings);
    let mut dropdown = ui::pattern_dropdown(state.preset.name());
    let buttons = ui::create_buttons();
    let mut canvas = MacroquadCanvas::default();

    loop {
        let mouse_pos = mouse_position();
        let pressed = is_mouse_button_pressed(MouseButton::Left);

        // Gather this frame's events: selector first, then buttons, keys, painting
        let mut events = Vec::new();
        if let Some(name) = dropdown.update(mouse_pos, pressed) {
            events.push(InputEvent::SelectPattern(name.to_owned()));
        }
        events.extend(buttons.iter().filter_map(|btn| btn.clicked(mouse_pos, pressed)));
        events.extend(input::keyboard_events());
        if !dropdown.is_open() {
            events.extend(input::grid_pointer_events(mouse_pos));
        }

        for event in events {
            if let InputEvent::SelectPattern(name) = &event {
                dropdown.select_value(name);
            }
            state = state.apply(event);
        }
        state = state.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        rendering::draw_dense(&mut canvas, state.grid(), state.settings.cell_size);
        rendering::draw_controls(&state, &buttons, &dropdown, ui::panel_x(), mouse_pos);

        next_frame().await;
    }
}
