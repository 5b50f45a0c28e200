//! Pannable, zoomable view over an unbounded sparse plane.

use std::time::Duration;

use log::info;
use macroquad::prelude::*;
use life_canvas::{
    CameraSession, SetupError, Settings,
    config,
    input::{self, ResizeWatcher},
    rendering::{self, MacroquadCanvas},
    setup,
};

fn window_conf() -> Conf {
    config::camera_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = run().await {
        match err {
            // No logger to report through
            SetupError::Logger(_) => eprintln!("life_camera: {err}"),
            _ => log::error!("life_camera: {err}"),
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<(), SetupError> {
    setup::init_logging()?;
    let settings = Settings {
        initial_pattern: "glider-gun",
        ..Default::default()
    };
    settings.validate()?;
    let viewport = setup::surface_size()?;
    info!(
        "starting life_camera v{}: pattern {}",
        env!("CARGO_PKG_VERSION"),
        settings.initial_pattern
    );

    let mut session = CameraSession::new(settings, viewport);
    let mut resize = ResizeWatcher::new(viewport);
    let mut canvas = MacroquadCanvas::default();

    loop {
        let viewport = vec2(screen_width(), screen_height());
        let events = resize
            .poll(viewport)
            .into_iter()
            .chain(input::keyboard_events())
            .chain(input::camera_pointer_events(mouse_position()));
        for event in events {
            session = session.apply(event);
        }
        session = session.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        rendering::draw_sparse(
            &mut canvas,
            session.cells(),
            &session.camera,
            viewport,
            session.settings.cell_size,
        );
        rendering::draw_camera_hud(&session);

        next_frame().await;
    }
}
