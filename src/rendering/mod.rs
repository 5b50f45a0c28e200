use macroquad::prelude::*;

use crate::application::{Camera, CameraSession, GameState, RunState};
use crate::domain::{Generation, Grid, SparseGeneration};
use crate::ui::{Button, Dropdown};

mod canvas;

pub use canvas::{Canvas, MacroquadCanvas};

/// Spacing below which gridlines are skipped (they would fill the screen)
const MIN_GRIDLINE_SPACING: f32 = 4.0;

/// Draw a dense generation: a filled square per live cell, cleared squares
/// for dead ones, then gridlines every `cell_size` pixels.
pub fn draw_dense<C: Canvas>(canvas: &mut C, grid: &Grid, cell_size: f32) {
    for (x, y, cell) in grid.iter_cells() {
        let (px, py) = (x as f32 * cell_size, y as f32 * cell_size);
        if cell.is_alive() {
            canvas.fill_rect(px, py, cell_size, cell_size);
        } else {
            canvas.clear_rect(px, py, cell_size, cell_size);
        }
    }

    let (w, h) = grid.dimensions();
    let (width, height) = (w as f32 * cell_size, h as f32 * cell_size);
    for i in 1..w {
        let x = i as f32 * cell_size;
        canvas.line(x, 0.0, x, height);
    }
    for j in 1..h {
        let y = j as f32 * cell_size;
        canvas.line(0.0, y, width, y);
    }
}

/// Draw a sparse generation through the camera, culling cells outside the viewport
pub fn draw_sparse<C: Canvas>(
    canvas: &mut C,
    cells: &SparseGeneration,
    camera: &Camera,
    viewport: Vec2,
    cell_size: f32,
) {
    canvas.clear_rect(0.0, 0.0, viewport.x, viewport.y);

    let spacing = camera.scaled_cell(cell_size);
    if spacing >= MIN_GRIDLINE_SPACING {
        let mut x = camera.offset.x.rem_euclid(spacing);
        while x < viewport.x {
            canvas.line(x, 0.0, x, viewport.y);
            x += spacing;
        }
        let mut y = camera.offset.y.rem_euclid(spacing);
        while y < viewport.y {
            canvas.line(0.0, y, viewport.x, y);
            y += spacing;
        }
    }

    let ((min_x, min_y), (max_x, max_y)) = camera.visible_cells(viewport, cell_size);
    cells
        .alive_cells()
        .filter(|&(x, y)| (min_x..=max_x).contains(&x) && (min_y..=max_y).contains(&y))
        .for_each(|pos| {
            let corner = camera.cell_to_screen(pos, cell_size);
            canvas.fill_rect(corner.x, corner.y, spacing, spacing);
        });
}

/// Draw the fixed-grid variant's control panel
pub fn draw_controls(
    state: &GameState,
    buttons: &[Button],
    dropdown: &Dropdown,
    panel_x: f32,
    mouse_pos: (f32, f32),
) {
    draw_rectangle(
        panel_x,
        0.0,
        screen_width() - panel_x,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let running = state.run_state() == RunState::Running;
    let labels = [
        ("Controls:", 330.0, 14.0, WHITE),
        ("Right: Step", 345.0, 12.0, GRAY),
        ("Left: Reset", 358.0, 12.0, GRAY),
        ("Space: Play", 371.0, 12.0, GRAY),
        ("R: Random", 384.0, 12.0, GRAY),
        ("LMB/RMB: Paint", 397.0, 12.0, GRAY),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, panel_x, *y, *size, *color);
    });
    draw_text(state.preset.pattern().description, panel_x, 420.0, 12.0, GRAY);

    draw_text("Generation:", panel_x, 440.0, 16.0, WHITE);
    draw_text(
        &state.generation().to_string(),
        panel_x,
        460.0,
        20.0,
        Color::from_rgba(0, 255, 150, 255),
    );
    draw_text("Population:", panel_x, 490.0, 16.0, WHITE);
    draw_text(
        &state.grid().population().to_string(),
        panel_x,
        510.0,
        16.0,
        Color::from_rgba(180, 180, 180, 255),
    );
    draw_text("Status:", panel_x, 545.0, 16.0, WHITE);
    draw_text(
        if running { "Running" } else { "Paused" },
        panel_x,
        565.0,
        16.0,
        if running {
            Color::from_rgba(0, 255, 0, 255)
        } else {
            Color::from_rgba(255, 165, 0, 255)
        },
    );

    // Last so an open list covers the labels
    dropdown.draw(mouse_pos);
}

/// Status line for the camera variant
pub fn draw_camera_hud(session: &CameraSession) {
    let status = if session.run.is_running() { "Running" } else { "Paused" };
    let text = format!(
        "gen {}  cells {}  zoom {:.1}x  {}  [{}: {}]",
        session.life.generation(),
        session.cells().len(),
        session.camera.zoom,
        status,
        session.preset.name(),
        session.preset.pattern().description,
    );
    draw_text(&text, 10.0, 20.0, 18.0, Color::from_rgba(180, 180, 180, 255));
}
