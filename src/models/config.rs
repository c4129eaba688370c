//! Grid sizing for a game session.

/// Pixel size of one grid cell.
pub const CELL_PIXELS: usize = 40;

/// Pixel size of the play area the default window leaves for the board.
pub const BOARD_WIDTH: usize = 800;
/// See [`BOARD_WIDTH`].
pub const BOARD_HEIGHT: usize = 600;

/// Dimensions of the play grid, fixed for the whole session.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
}

impl GameConfig {
    /// Derives the grid from a pixel area, one cell per 40x40 block.
    #[must_use]
    pub fn from_size(width: usize, height: usize) -> Self {
        Self {
            rows: height / CELL_PIXELS,
            cols: width / CELL_PIXELS,
        }
    }

    /// A cramped grid for tests.
    #[must_use]
    pub fn small() -> Self {
        Self { rows: 5, cols: 5 }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_size(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fills_the_board_area() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 15);
        assert_eq!(config.cols, 20);
    }

    #[test]
    fn from_size_rounds_down_to_whole_cells() {
        let config = GameConfig::from_size(210, 130);
        assert_eq!(config.rows, 3);
        assert_eq!(config.cols, 5);
    }
}
