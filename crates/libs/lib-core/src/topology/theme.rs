//! # Glyph Theme
//!
//! The characters the topology map is drawn with. A theme is passed to the
//! renderer explicitly; there is no global theme state. The terminal loads
//! and saves it as JSON.

use super::connector::Direction;
use serde::{Deserialize, Serialize};
use shared::dto::network::NodeStatus;

/// Rows in a node glyph block
pub const BLOCK_HEIGHT: usize = 3;
/// Columns in a node glyph block
pub const BLOCK_WIDTH: usize = 5;

/// Glyph set for the topology map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphTheme {
    /// Fill character of an empty cell
    pub background: char,
    pub active: [String; BLOCK_HEIGHT],
    pub syncing: [String; BLOCK_HEIGHT],
    pub offline: [String; BLOCK_HEIGHT],
    /// Arrows indexed like [`Direction::ALL`]: E, NE, N, NW, W, SW, S, SE
    pub arrows: [char; 8],
}

impl Default for GlyphTheme {
    fn default() -> Self {
        Self {
            background: ' ',
            active: block('✓'),
            syncing: block('↻'),
            offline: block('✗'),
            arrows: ['→', '↗', '↑', '↖', '←', '↙', '↓', '↘'],
        }
    }
}

fn block(symbol: char) -> [String; BLOCK_HEIGHT] {
    [
        "┌───┐".to_string(),
        format!("│ {} │", symbol),
        "└───┘".to_string(),
    ]
}

impl GlyphTheme {
    /// Plain ASCII variant for terminals without box-drawing fonts
    pub fn ascii() -> Self {
        let ascii_block = |symbol: char| {
            [
                "+---+".to_string(),
                format!("| {} |", symbol),
                "+---+".to_string(),
            ]
        };
        Self {
            background: ' ',
            active: ascii_block('+'),
            syncing: ascii_block('~'),
            offline: ascii_block('x'),
            arrows: ['>', '/', '^', '\\', '<', '/', 'v', '\\'],
        }
    }

    /// Glyph block for a node status
    pub fn block(&self, status: NodeStatus) -> &[String; BLOCK_HEIGHT] {
        match status {
            NodeStatus::Active => &self.active,
            NodeStatus::Syncing => &self.syncing,
            NodeStatus::Offline => &self.offline,
        }
    }

    pub fn arrow(&self, direction: Direction) -> char {
        self.arrows[direction.index()]
    }

    /// Check that every block row is exactly [`BLOCK_WIDTH`] characters wide.
    pub fn validate(&self) -> Result<(), String> {
        for status in NodeStatus::all() {
            for (row, line) in self.block(*status).iter().enumerate() {
                let width = line.chars().count();
                if width != BLOCK_WIDTH {
                    return Err(format!(
                        "{} block row {} is {} characters wide, expected {}",
                        status, row, width, BLOCK_WIDTH
                    ));
                }
            }
        }
        Ok(())
    }
}
