//! Canvas 2D painter for engine frames

use game_core::{Aabb, DrawCommand, Frame};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Replay a frame's display list onto the canvas
pub fn paint(ctx: &CanvasRenderingContext2d, frame: &Frame) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, frame.width as f64, frame.height as f64);

    for command in &frame.commands {
        match command {
            DrawCommand::FillGradient { rect, stops } => {
                let gradient =
                    ctx.create_linear_gradient(0.0, rect.min.y as f64, 0.0, rect.max.y as f64);
                for (offset, color) in stops {
                    gradient.add_color_stop(*offset, &color.to_string())?;
                }
                ctx.set_fill_style_canvas_gradient(&gradient);
                fill(ctx, rect);
            }
            DrawCommand::FillRect { rect, color } => {
                ctx.set_fill_style_str(&color.to_string());
                fill(ctx, rect);
            }
            DrawCommand::Text {
                x,
                y,
                text,
                color,
                font,
            } => {
                ctx.set_font(font);
                ctx.set_fill_style_str(&color.to_string());
                ctx.fill_text(text, *x as f64, *y as f64)?;
            }
        }
    }
    Ok(())
}

fn fill(ctx: &CanvasRenderingContext2d, rect: &Aabb) {
    let size = rect.size();
    ctx.fill_rect(
        rect.min.x as f64,
        rect.min.y as f64,
        size.x as f64,
        size.y as f64,
    );
}
