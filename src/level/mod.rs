mod builtin;
pub(crate) mod template;
use self::template::LevelTemplate;
use crate::pixel::PixelPos;
use ratatui::layout::{Position, Size};

/// Tile code for walkable floor
pub(crate) const FLOOR_TILE: u8 = 2;

/// Tile code for a wall
pub(crate) const WALL_TILE: u8 = 3;

/// Tile code for an uncollected fruit
pub(crate) const FRUIT_TILE: u8 = 5;

/// Tile code for the exit gate
pub(crate) const EXIT_TILE: u8 = 6;

/// A flat array mapping grid cell `(column, row)` to a small tile code.
/// Lookups outside the grid fail closed and report 0 (empty).
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct TileLayer {
    width: u16,
    height: u16,
    data: Vec<u8>,
}

impl TileLayer {
    fn new(width: u16, height: u16, data: Vec<u8>) -> TileLayer {
        TileLayer {
            width,
            height,
            data,
        }
    }

    /// Return the tile code at `(col, row)`, or 0 if the cell is outside
    /// the grid.
    pub(crate) fn at(&self, col: i32, row: i32) -> u8 {
        let (Ok(col), Ok(row)) = (usize::try_from(col), usize::try_from(row)) else {
            return 0;
        };
        if col >= usize::from(self.width) || row >= usize::from(self.height) {
            return 0;
        }
        self.data
            .get(row * usize::from(self.width) + col)
            .copied()
            .unwrap_or(0)
    }

    fn set(&mut self, col: i32, row: i32, code: u8) {
        let (Ok(col), Ok(row)) = (usize::try_from(col), usize::try_from(row)) else {
            return;
        };
        if col >= usize::from(self.width) || row >= usize::from(self.height) {
            return;
        }
        if let Some(cell) = self.data.get_mut(row * usize::from(self.width) + col) {
            *cell = code;
        }
    }

    /// Iterate over the grid cells holding `code`, for the renderer.
    pub(crate) fn cells_with(&self, code: u8) -> impl Iterator<Item = Position> + '_ {
        let width = usize::from(self.width);
        self.data.iter().enumerate().filter_map(move |(i, &c)| {
            (c == code && i / width < usize::from(self.height)).then(|| {
                Position::new(
                    u16::try_from(i % width).unwrap_or(u16::MAX),
                    u16::try_from(i / width).unwrap_or(u16::MAX),
                )
            })
        })
    }
}

/// The live state of a level: the collision-relevant tile layers, the
/// spawn point, and the fruit-collection counter.  The floor layer is
/// purely scenery and stays behind in the template.  The fruit layer is
/// this level's own mutable working copy; constructing a `Level` from the
/// same template again resets it to authorial state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Level {
    width: u16,
    height: u16,
    tile_size: i32,
    wall: TileLayer,
    fruit: TileLayer,
    gate_exit: TileLayer,
    spawn: PixelPos,
    fruits_collected: u32,
    total_fruits: u32,
}

impl Level {
    pub(crate) fn new(template: &LevelTemplate) -> Level {
        let total_fruits = template
            .fruit
            .iter()
            .filter(|&&code| code == FRUIT_TILE)
            .count();
        Level {
            width: template.width,
            height: template.height,
            tile_size: template.tile_size,
            wall: TileLayer::new(template.width, template.height, template.wall.clone()),
            fruit: TileLayer::new(template.width, template.height, template.fruit.clone()),
            gate_exit: TileLayer::new(
                template.width,
                template.height,
                template.gate_exit.clone(),
            ),
            spawn: template.spawn,
            fruits_collected: 0,
            total_fruits: u32::try_from(total_fruits).unwrap_or(u32::MAX),
        }
    }

    /// Return the code the given layer holds at the tile covering `pos`
    fn layer_code(&self, pos: PixelPos, layer: &TileLayer) -> u8 {
        let (col, row) = pos.tile(self.tile_size);
        layer.at(col, row)
    }

    pub(crate) fn is_wall(&self, pos: PixelPos) -> bool {
        self.layer_code(pos, &self.wall) == WALL_TILE
    }

    pub(crate) fn is_fruit(&self, pos: PixelPos) -> bool {
        self.layer_code(pos, &self.fruit) == FRUIT_TILE
    }

    pub(crate) fn is_exit(&self, pos: PixelPos) -> bool {
        self.layer_code(pos, &self.gate_exit) == EXIT_TILE
    }

    /// Collect the fruit on the tile covering `pos`, clearing the cell and
    /// bumping the counter.  A tile without an uncollected fruit, including
    /// one collected on an earlier frame, is left untouched and reports
    /// `false`, so nothing is ever counted twice.
    pub(crate) fn collect_fruit(&mut self, pos: PixelPos) -> bool {
        let (col, row) = pos.tile(self.tile_size);
        if self.fruit.at(col, row) != FRUIT_TILE {
            return false;
        }
        self.fruit.set(col, row, 0);
        self.fruits_collected += 1;
        true
    }

    /// Is the exit gate active?  This is the single quota comparison both
    /// the simulation and the gate renderer consult.
    pub(crate) fn exit_open(&self) -> bool {
        self.fruits_collected >= self.total_fruits
    }

    pub(crate) fn fruits_collected(&self) -> u32 {
        self.fruits_collected
    }

    pub(crate) fn total_fruits(&self) -> u32 {
        self.total_fruits
    }

    pub(crate) fn spawn(&self) -> PixelPos {
        self.spawn
    }

    pub(crate) fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// Grid dimensions in tiles
    pub(crate) fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub(crate) fn walls(&self) -> impl Iterator<Item = Position> + '_ {
        self.wall.cells_with(WALL_TILE)
    }

    pub(crate) fn fruits(&self) -> impl Iterator<Item = Position> + '_ {
        self.fruit.cells_with(FRUIT_TILE)
    }

    pub(crate) fn exits(&self) -> impl Iterator<Item = Position> + '_ {
        self.gate_exit.cells_with(EXIT_TILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse(cells: &[(u16, u16)], code: u8, width: u16, height: u16) -> Vec<u8> {
        let mut data = vec![0; usize::from(width) * usize::from(height)];
        for &(col, row) in cells {
            data[usize::from(row) * usize::from(width) + usize::from(col)] = code;
        }
        data
    }

    fn test_level() -> Level {
        let template = LevelTemplate {
            name: String::from("test"),
            width: 4,
            height: 3,
            tile_size: 16,
            floor: vec![FLOOR_TILE; 12],
            wall: sparse(&[(0, 0), (3, 2)], WALL_TILE, 4, 3),
            fruit: sparse(&[(1, 1), (2, 0)], FRUIT_TILE, 4, 3),
            gate_exit: sparse(&[(3, 0)], EXIT_TILE, 4, 3),
            spawn: PixelPos::new(16, 16),
        };
        Level::new(&template)
    }

    #[test]
    fn layer_lookup() {
        let level = test_level();
        assert!(level.is_wall(PixelPos::new(0, 0)));
        assert!(level.is_wall(PixelPos::new(15, 15)));
        assert!(!level.is_wall(PixelPos::new(16, 0)));
        assert!(level.is_fruit(PixelPos::new(17, 18)));
        assert!(level.is_exit(PixelPos::new(48, 0)));
    }

    #[test]
    fn out_of_bounds_fails_closed() {
        let level = test_level();
        for pos in [
            PixelPos::new(-1, 0),
            PixelPos::new(0, -1),
            PixelPos::new(64, 0),
            PixelPos::new(0, 48),
            PixelPos::new(1000, 1000),
        ] {
            assert!(!level.is_wall(pos), "wall reported at {pos:?}");
            assert!(!level.is_fruit(pos), "fruit reported at {pos:?}");
            assert!(!level.is_exit(pos), "exit reported at {pos:?}");
        }
    }

    #[test]
    fn collect_fruit_is_idempotent() {
        let mut level = test_level();
        assert_eq!(level.total_fruits(), 2);
        let pos = PixelPos::new(20, 20);
        assert!(level.collect_fruit(pos));
        assert_eq!(level.fruits_collected(), 1);
        assert!(!level.is_fruit(pos));
        assert!(!level.collect_fruit(pos));
        assert_eq!(level.fruits_collected(), 1);
        assert!(!level.collect_fruit(PixelPos::new(0, 0)));
        assert!(!level.collect_fruit(PixelPos::new(-5, -5)));
        assert_eq!(level.fruits_collected(), 1);
    }

    #[test]
    fn exit_opens_on_quota() {
        let mut level = test_level();
        assert!(!level.exit_open());
        assert!(level.collect_fruit(PixelPos::new(20, 20)));
        assert!(!level.exit_open());
        assert!(level.collect_fruit(PixelPos::new(32, 0)));
        assert!(level.exit_open());
    }

    #[test]
    fn cell_iterators() {
        let mut level = test_level();
        assert_eq!(
            level.walls().collect::<Vec<_>>(),
            vec![Position::new(0, 0), Position::new(3, 2)]
        );
        assert_eq!(
            level.fruits().collect::<Vec<_>>(),
            vec![Position::new(2, 0), Position::new(1, 1)]
        );
        assert_eq!(level.exits().collect::<Vec<_>>(), vec![Position::new(3, 0)]);
        assert!(level.collect_fruit(PixelPos::new(16, 16)));
        assert_eq!(
            level.fruits().collect::<Vec<_>>(),
            vec![Position::new(2, 0)]
        );
    }

    #[test]
    fn short_layer_data_fails_closed() {
        let layer = TileLayer::new(4, 3, vec![WALL_TILE; 5]);
        assert_eq!(layer.at(0, 0), WALL_TILE);
        assert_eq!(layer.at(1, 1), 0);
        assert_eq!(layer.at(3, 2), 0);
    }
}
