//! Block grid
//!
//! A fixed rows x cols arrangement of destructible blocks. Positions are
//! derived from grid indices and never change; only the alive flag flips,
//! and only from alive to dead within a game.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GridLayout;

/// A single destructible block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub row: u32,
    pub col: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub alive: bool,
}

/// The grid of blocks, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockGrid {
    layout: GridLayout,
    blocks: Vec<Block>,
}

impl BlockGrid {
    /// Build a fully alive grid from a layout
    pub fn new(layout: GridLayout) -> Self {
        let mut grid = Self {
            layout,
            blocks: Vec::with_capacity((layout.rows * layout.cols) as usize),
        };
        grid.reset();
        grid
    }

    /// Restore every block to alive at its computed position
    pub fn reset(&mut self) {
        let layout = self.layout;
        self.blocks.clear();
        for row in 0..layout.rows {
            for col in 0..layout.cols {
                self.blocks.push(Block {
                    row,
                    col,
                    pos: layout.block_origin(row, col),
                    alive: true,
                });
            }
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Size shared by every block
    #[inline]
    pub fn block_size(&self) -> Vec2 {
        self.layout.block_size
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Block at (row, col), if in range
    pub fn get(&self, row: u32, col: u32) -> Option<&Block> {
        if row >= self.layout.rows || col >= self.layout.cols {
            return None;
        }
        self.blocks.get((row * self.layout.cols + col) as usize)
    }

    /// Iterator over blocks still standing
    pub fn alive(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.alive)
    }

    /// Mark the block at `index` dead. Returns true only if it was alive.
    pub fn kill(&mut self, index: usize) -> bool {
        match self.blocks.get_mut(index) {
            Some(block) if block.alive => {
                block.alive = false;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.alive().count()
    }

    pub fn destroyed(&self) -> usize {
        self.blocks.len() - self.remaining()
    }

    /// True once every block has been destroyed
    pub fn all_cleared(&self) -> bool {
        self.blocks.iter().all(|b| !b.alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn grid() -> BlockGrid {
        BlockGrid::new(GameConfig::default().grid_layout())
    }

    #[test]
    fn test_new_grid_all_alive() {
        let grid = grid();
        assert_eq!(grid.len(), 24);
        assert_eq!(grid.remaining(), 24);
        assert_eq!(grid.destroyed(), 0);
        assert!(!grid.all_cleared());
    }

    #[test]
    fn test_block_positions() {
        let grid = grid();
        let first = grid.get(0, 0).unwrap();
        assert_eq!(first.pos, Vec2::new(5.0, 40.0));
        let b = grid.get(2, 3).unwrap();
        assert_eq!((b.row, b.col), (2, 3));
        assert_eq!(b.pos, Vec2::new(5.0 + 3.0 * 80.0, 40.0 + 2.0 * 30.0));
        assert!(grid.get(4, 0).is_none());
        assert!(grid.get(0, 6).is_none());
    }

    #[test]
    fn test_kill_only_once() {
        let mut grid = grid();
        assert!(grid.kill(7));
        assert!(!grid.kill(7));
        assert!(!grid.kill(999));
        assert_eq!(grid.destroyed(), 1);
    }

    #[test]
    fn test_all_cleared_and_reset() {
        let mut grid = grid();
        for i in 0..grid.len() {
            grid.kill(i);
        }
        assert!(grid.all_cleared());
        assert_eq!(grid.remaining(), 0);

        let fresh = self::grid();
        grid.reset();
        assert_eq!(grid, fresh);
    }
}
