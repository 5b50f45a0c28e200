use macroquad::prelude::*;

const ROW_HEIGHT: f32 = 30.0;
const FONT_SIZE: f32 = 16.0;

/// Dropdown selector; acts as the pattern selection source
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    /// Currently selected item text
    pub fn value(&self) -> &str {
        self.items.get(self.selected).map_or("", String::as_str)
    }

    /// Select the item with the given text, if present
    pub fn select_value(&mut self, value: &str) {
        if let Some(idx) = self.items.iter().position(|item| item == value) {
            self.selected = idx;
        }
    }

    /// Check if dropdown is open
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    fn main_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, ROW_HEIGHT)
    }

    fn item_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.x,
            self.y + ROW_HEIGHT * (index + 1) as f32,
            self.width,
            ROW_HEIGHT,
        )
    }

    /// Handle a frame of pointer input.
    /// Returns the newly selected value when the selection changed.
    pub fn update(&mut self, mouse_pos: (f32, f32), pressed: bool) -> Option<&str> {
        if !pressed {
            return None;
        }
        let point = vec2(mouse_pos.0, mouse_pos.1);

        if self.main_rect().contains(point) {
            self.is_open = !self.is_open;
            return None;
        }
        if !self.is_open {
            return None;
        }
        self.is_open = false;

        let hit = (0..self.items.len()).find(|&i| self.item_rect(i).contains(point))?;
        if hit == self.selected {
            return None;
        }
        self.selected = hit;
        Some(self.value())
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let point = vec2(mouse_pos.0, mouse_pos.1);
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let main = self.main_rect();
        let button_color = if main.contains(point) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(main.x, main.y, main.w, main.h, button_color);
        draw_rectangle_lines(main.x, main.y, main.w, main.h, 2.0, WHITE);
        draw_text(self.value(), main.x + 5.0, main.y + 21.0, FONT_SIZE, WHITE);
        draw_text("v", main.x + main.w - 18.0, main.y + 21.0, 14.0, WHITE);

        if !self.is_open {
            return;
        }
        for (i, item) in self.items.iter().enumerate() {
            let row = self.item_rect(i);
            let color = if row.contains(point) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            draw_rectangle(row.x, row.y, row.w, row.h, color);
            let border = Color::from_rgba(80, 80, 80, 255);
            draw_rectangle_lines(row.x, row.y, row.w, row.h, 1.0, border);
            draw_text(item, row.x + 5.0, row.y + 21.0, FONT_SIZE, WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> Dropdown {
        let items = ["empty", "glider", "glider-gun"].map(String::from).to_vec();
        Dropdown::new(0.0, 0.0, 100.0, "Pattern", items)
    }

    #[test]
    fn test_open_then_pick() {
        let mut dropdown = patterns();
        assert_eq!(dropdown.update((50.0, 15.0), true), None);
        assert!(dropdown.is_open());
        // Third row: y in [90, 120]
        assert_eq!(dropdown.update((50.0, 100.0), true), Some("glider-gun"));
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.value(), "glider-gun");
    }

    #[test]
    fn test_click_outside_closes_without_change() {
        let mut dropdown = patterns();
        dropdown.update((50.0, 15.0), true);
        assert_eq!(dropdown.update((500.0, 500.0), true), None);
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.value(), "empty");
    }

    #[test]
    fn test_items_ignored_while_closed() {
        let mut dropdown = patterns();
        assert_eq!(dropdown.update((50.0, 100.0), true), None);
        dropdown.select_value("glider");
        assert_eq!(dropdown.value(), "glider");
    }
}
