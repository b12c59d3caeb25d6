use macroquad::prelude::*;

use common::game::GameUi;

const BANNER_TEXT: &str = "You Win!";
const BUTTON_TEXT: &str = "Replay";
const BANNER_FONT_SIZE: u16 = 64;
const BUTTON_FONT_SIZE: u16 = 32;
const BUTTON_PADDING: f32 = 12.0;

/// The "solved" banner with its replay button.
#[derive(Debug, Default)]
pub struct Banner {
    visible: bool,
}

impl GameUi for Banner {
    fn show_solved(&mut self) {
        self.visible = true;
    }

    fn hide_solved(&mut self) {
        self.visible = false;
    }
}

impl Banner {
    fn button_rect(&self) -> Rect {
        let dims = measure_text(BUTTON_TEXT, None, BUTTON_FONT_SIZE, 1.0);
        let width = dims.width + 2.0 * BUTTON_PADDING;
        let height = dims.height + 2.0 * BUTTON_PADDING;
        Rect::new(
            (screen_width() - width) / 2.0,
            screen_height() / 2.0 + 20.0,
            width,
            height,
        )
    }

    pub fn replay_clicked(&self) -> bool {
        if !self.visible || !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }
        let (x, y) = mouse_position();
        self.button_rect().contains(vec2(x, y))
    }

    pub fn draw(&self) {
        if !self.visible {
            return;
        }

        let dims = measure_text(BANNER_TEXT, None, BANNER_FONT_SIZE, 1.0);
        draw_text(
            BANNER_TEXT,
            (screen_width() - dims.width) / 2.0,
            screen_height() / 2.0 - dims.height,
            BANNER_FONT_SIZE as f32,
            WHITE,
        );

        let button = self.button_rect();
        draw_rectangle(button.x, button.y, button.w, button.h, DARKGREEN);
        draw_rectangle_lines(button.x, button.y, button.w, button.h, 2.0, WHITE);
        let text = measure_text(BUTTON_TEXT, None, BUTTON_FONT_SIZE, 1.0);
        draw_text(
            BUTTON_TEXT,
            button.x + BUTTON_PADDING,
            button.y + BUTTON_PADDING + text.offset_y,
            BUTTON_FONT_SIZE as f32,
            WHITE,
        );
    }
}
