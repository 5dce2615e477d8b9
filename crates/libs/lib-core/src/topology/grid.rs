//! Character grid the topology map is drawn on.

use std::fmt;

/// A `height × width` matrix of display characters, row-major.
///
/// A cell holding the background glyph counts as empty, including the
/// padding inside a node block such as `│ ✓ │`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    background: char,
    cells: Vec<char>,
}

impl Grid {
    /// Allocate a grid filled with `background`. Zero dimensions are allowed.
    pub fn new(width: usize, height: usize, background: char) -> Self {
        let len = width.saturating_mul(height);
        Self {
            width,
            height,
            background,
            cells: vec![background; len],
        }
    }

    /// Grid seeded with spaces
    pub fn blank(width: usize, height: usize) -> Self {
        Self::new(width, height, ' ')
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn background(&self) -> char {
        self.background
    }

    /// Signed bounds check, for path walking
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    /// Write `glyph`. Out-of-bounds writes are dropped; returns whether the
    /// write landed.
    pub fn set(&mut self, x: usize, y: usize, glyph: char) -> bool {
        match self.offset(x, y) {
            Some(i) => {
                self.cells[i] = glyph;
                true
            }
            None => false,
        }
    }

    /// Stamp a multi-line block with its top-left corner at `(x, y)`.
    ///
    /// Rows and columns falling outside the grid are clipped. Existing glyphs
    /// are overwritten (last writer wins). Returns the number of cells written.
    pub fn stamp<S: AsRef<str>>(&mut self, x: usize, y: usize, block: &[S]) -> usize {
        let mut written = 0;
        for (row, line) in block.iter().enumerate() {
            let Some(cy) = y.checked_add(row) else { break };
            if cy >= self.height {
                break;
            }
            for (col, glyph) in line.as_ref().chars().enumerate() {
                let Some(cx) = x.checked_add(col) else { break };
                if cx >= self.width {
                    break;
                }
                if self.set(cx, cy, glyph) {
                    written += 1;
                }
            }
        }
        written
    }

    /// True when every cell holds the background glyph
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| *c == self.background)
    }

    /// Serialize row by row
    pub fn rows(&self) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); self.height];
        }
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rows().join("\n"))
    }
}
