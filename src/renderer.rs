use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::board::FrameBuffer;
use crate::config::{BoardSize, GLYPH_HALF_UPPER};
use crate::game::GameStatus;

/// Renders the framebuffer and status overlay for one frame.
///
/// Each terminal cell shows two vertically stacked pixels: the upper one as
/// the foreground of a half-block glyph, the lower one as the background.
pub fn render(frame: &mut Frame<'_>, display: &FrameBuffer, status: GameStatus) {
    let area = board_area(frame.area(), display.size());
    let block = Block::bordered()
        .title(" led-snake ")
        .title_alignment(Alignment::Center)
        .title_bottom(" wasd/arrows steer · r restart · q quit ")
        .border_style(Style::new().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    blit_pixels(frame, inner, display);

    if status == GameStatus::GameOver {
        render_game_over(frame, inner);
    }
}

/// Centers the bordered board inside the terminal, clamping to fit.
fn board_area(frame_area: Rect, size: BoardSize) -> Rect {
    let want_width = u16::try_from(size.width).unwrap_or(u16::MAX).saturating_add(2);
    let want_height = u16::try_from(size.height / 2)
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let width = want_width.min(frame_area.width);
    let height = want_height.min(frame_area.height);
    let x = frame_area.x + (frame_area.width - width) / 2;
    let y = frame_area.y + (frame_area.height - height) / 2;

    Rect::new(x, y, width, height)
}

fn blit_pixels(frame: &mut Frame<'_>, inner: Rect, display: &FrameBuffer) {
    let size = display.size();
    let buffer = frame.buffer_mut();

    for cell_y in 0..inner.height {
        let pixel_y = i32::from(cell_y) * 2;
        if pixel_y >= size.height {
            break;
        }
        for cell_x in 0..inner.width {
            let pixel_x = i32::from(cell_x);
            if pixel_x >= size.width {
                break;
            }

            let style = Style::new()
                .fg(rgb(display.get(pixel_x, pixel_y)))
                .bg(rgb(display.get(pixel_x, pixel_y + 1)));
            buffer.set_string(
                inner.x + cell_x,
                inner.y + cell_y,
                GLYPH_HALF_UPPER,
                style,
            );
        }
    }
}

fn render_game_over(frame: &mut Frame<'_>, inner: Rect) {
    let lines = vec![
        Line::styled(
            "GAME OVER",
            Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::styled("press r to restart", Style::new().fg(Color::Gray)),
    ];

    let height = u16::try_from(lines.len()).unwrap_or(0).min(inner.height);
    let overlay = Rect::new(
        inner.x,
        inner.y + (inner.height.saturating_sub(height)) / 2,
        inner.width,
        height,
    );

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), overlay);
}

fn rgb(color: u32) -> Color {
    Color::Rgb((color >> 16) as u8, (color >> 8) as u8, color as u8)
}
