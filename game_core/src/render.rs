//! Display list built from game state
//!
//! `render` never touches the canvas itself: it describes the frame as a list
//! of draw commands that the host paints in order.

use crate::{Aabb, Config, GameMap, GameState, Phase};
use std::fmt;

/// sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// CSS hex form, e.g. `#87CEEB`
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub mod palette {
    use super::Color;

    pub const SKY_TOP: Color = Color::rgb(0x87, 0xCE, 0xEB);
    pub const SKY_MID: Color = Color::rgb(0x98, 0xD8, 0xC8);
    pub const SKY_BOTTOM: Color = Color::rgb(0x90, 0xEE, 0x90);
    pub const DINO: Color = Color::rgb(0xD2, 0x69, 0x1E);
    pub const EYE: Color = Color::rgb(0xFF, 0xD7, 0x00);
    pub const GRASS: Color = Color::rgb(0x22, 0x8B, 0x22);
    pub const GRASS_TOP: Color = Color::rgb(0x90, 0xEE, 0x90);
    pub const CACTUS: Color = Color::rgb(0x22, 0x8B, 0x22);
    pub const SPIKES: Color = Color::rgb(0x00, 0x64, 0x00);
    pub const SHADOW: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const TEXT: Color = Color::rgb(0xFF, 0xFF, 0xFF);
}

pub const SCORE_FONT: &str = "bold 20px Arial";

/// One painting step
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Vertical linear gradient; stops are `(offset 0..=1, colour)`
    FillGradient { rect: Aabb, stops: Vec<(f32, Color)> },
    FillRect { rect: Aabb, color: Color },
    /// Text drawn with its baseline at `y`
    Text {
        x: f32,
        y: f32,
        text: String,
        color: Color,
        font: &'static str,
    },
}

/// Everything needed to paint one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
    /// Status line shown under the canvas
    pub caption: String,
}

/// Build the frame for the current state
pub fn render(state: &GameState, map: &GameMap, config: &Config) -> Frame {
    let mut commands = Vec::with_capacity(16 + state.obstacles.len() * 3);

    draw_background(&mut commands, map);
    draw_ground(&mut commands, map);
    draw_actor(&mut commands, state, map, config);
    draw_obstacles(&mut commands, state, map);
    draw_score(&mut commands, state.score);

    Frame {
        width: map.width,
        height: map.height,
        commands,
        caption: caption(state),
    }
}

fn rect(commands: &mut Vec<DrawCommand>, x: f32, y: f32, w: f32, h: f32, color: Color) {
    commands.push(DrawCommand::FillRect {
        rect: Aabb::from_xywh(x, y, w, h),
        color,
    });
}

fn draw_background(commands: &mut Vec<DrawCommand>, map: &GameMap) {
    commands.push(DrawCommand::FillGradient {
        rect: Aabb::from_xywh(0.0, 0.0, map.width, map.ground_y),
        stops: vec![
            (0.0, palette::SKY_TOP),
            (0.5, palette::SKY_MID),
            (1.0, palette::SKY_BOTTOM),
        ],
    });

    // Large decorative dinosaur on the horizon
    let size = 80.0;
    let x = map.width - 120.0;
    let y = map.ground_y - size - 10.0;
    rect(commands, x, y + size * 0.2, size * 0.7, size * 0.5, palette::DINO); // body
    rect(commands, x + size * 0.4, y, size * 0.4, size * 0.4, palette::DINO); // head
    rect(commands, x + size * 0.5, y + size * 0.1, size * 0.1, size * 0.1, palette::EYE);
    rect(commands, x - size * 0.2, y + size * 0.3, size * 0.25, size * 0.3, palette::DINO); // tail
    rect(commands, x + size * 0.1, y + size * 0.7, size * 0.15, size * 0.3, palette::DINO);
    rect(commands, x + size * 0.4, y + size * 0.7, size * 0.15, size * 0.3, palette::DINO);
}

fn draw_ground(commands: &mut Vec<DrawCommand>, map: &GameMap) {
    let band = map.height - map.ground_y;
    rect(commands, 0.0, map.ground_y, map.width, band, palette::GRASS);
    rect(commands, 0.0, map.ground_y, map.width, 5.0, palette::GRASS_TOP);
}

fn draw_actor(commands: &mut Vec<DrawCommand>, state: &GameState, map: &GameMap, config: &Config) {
    let size = config.actor_size;
    let x = config.actor_x;
    let y = map.clamp_y(state.actor.y);
    rect(commands, x, y, size, size, palette::DINO);
    rect(commands, x + size * 0.3, y + size * 0.2, size * 0.2, size * 0.2, palette::EYE);
}

fn draw_obstacles(commands: &mut Vec<DrawCommand>, state: &GameState, map: &GameMap) {
    for obstacle in &state.obstacles {
        let top = map.ground_y - obstacle.height;
        let spike = obstacle.height * 0.3;
        rect(commands, obstacle.x, top, obstacle.width, obstacle.height, palette::CACTUS);
        rect(commands, obstacle.x - 3.0, top, 3.0, spike, palette::SPIKES);
        rect(commands, obstacle.right_edge(), top, 3.0, spike, palette::SPIKES);
    }
}

fn draw_score(commands: &mut Vec<DrawCommand>, score: u32) {
    let text = format!("Score: {score}");
    commands.push(DrawCommand::Text {
        x: 12.0,
        y: 32.0,
        text: text.clone(),
        color: palette::SHADOW,
        font: SCORE_FONT,
    });
    commands.push(DrawCommand::Text {
        x: 10.0,
        y: 30.0,
        text,
        color: palette::TEXT,
        font: SCORE_FONT,
    });
}

fn caption(state: &GameState) -> String {
    match state.phase {
        Phase::Idle => "Press SPACE or ↑ to start".to_string(),
        Phase::Running => "Press SPACE or ↑ to jump".to_string(),
        Phase::Over => format!(
            "Game Over! Final Score: {} - Press SPACE to restart",
            state.score
        ),
    }
}
