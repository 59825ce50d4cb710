use super::direction::Direction;
use super::snake::Snake;
use crate::consts;
use crate::level::template::LevelTemplate;
use crate::level::Level;

/// Where a play-through currently stands
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    Playing,
    GameOver,
    Victory,
}

/// One play-through of a level: the phase, the score, the level's working
/// state, and the snake.  A session is rebuilt from the template on every
/// (re)start; nothing carries over.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Session {
    pub(super) phase: Phase,
    pub(super) score: u32,
    pub(super) level: Level,
    pub(super) snake: Snake,
}

impl Session {
    pub(crate) fn new(template: &LevelTemplate) -> Session {
        let level = Level::new(template);
        let snake = Snake::new(level.spawn(), level.tile_size());
        Session {
            phase: Phase::Playing,
            score: 0,
            level,
            snake,
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// The order is fixed: move the snake, then check walls, then self
    /// collision, then fruit collection, then the exit gate.  A death ends
    /// the frame immediately; fruit and exit are checked on the same frame
    /// as each other.
    pub(crate) fn tick(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.snake.advance();
        let head = self.snake.head();
        if self.level.is_wall(head) {
            self.phase = Phase::GameOver;
            return;
        }
        if self.snake.hits_self() {
            self.phase = Phase::GameOver;
            return;
        }
        if self.level.is_fruit(head) && self.level.collect_fruit(head) {
            self.snake.grow();
            self.score += consts::FRUIT_SCORE;
        }
        if self.level.is_exit(head) && self.level.exit_open() {
            self.phase = Phase::Victory;
        }
    }

    /// Apply a steering input.  Takes effect immediately; turns straight
    /// backwards are ignored by the snake.
    pub(crate) fn steer(&mut self, heading: Direction) {
        self.snake.turn(heading);
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn level(&self) -> &Level {
        &self.level
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{EXIT_TILE, FLOOR_TILE, FRUIT_TILE, WALL_TILE};
    use crate::pixel::PixelPos;

    const WIDTH: u16 = 30;
    const HEIGHT: u16 = 20;

    /// A 30×20 arena with a given set of wall columns plus fruit and exit
    /// cells, all on row 9 unless stated otherwise.  The snake spawns at
    /// (48, 144), which is tile (3, 9), heading east at 2 px/frame.
    fn arena(
        wall_cells: &[(u16, u16)],
        fruit_cells: &[(u16, u16)],
        exit_cells: &[(u16, u16)],
    ) -> LevelTemplate {
        let cells = usize::from(WIDTH) * usize::from(HEIGHT);
        let mut wall = vec![0; cells];
        for &(col, row) in wall_cells {
            wall[usize::from(row) * usize::from(WIDTH) + usize::from(col)] = WALL_TILE;
        }
        let mut fruit = vec![0; cells];
        for &(col, row) in fruit_cells {
            fruit[usize::from(row) * usize::from(WIDTH) + usize::from(col)] = FRUIT_TILE;
        }
        let mut gate_exit = vec![0; cells];
        for &(col, row) in exit_cells {
            gate_exit[usize::from(row) * usize::from(WIDTH) + usize::from(col)] = EXIT_TILE;
        }
        LevelTemplate {
            name: String::from("arena"),
            width: WIDTH,
            height: HEIGHT,
            tile_size: 16,
            floor: vec![FLOOR_TILE; cells],
            wall,
            fruit,
            gate_exit,
            spawn: PixelPos::new(48, 144),
        }
    }

    #[test]
    fn straight_run_into_wall() {
        // Wall at column 15: the head's tile becomes (15, 9) when x reaches
        // 240, i.e. on tick 96.
        let template = arena(&[(15, 9)], &[], &[]);
        let mut session = Session::new(&template);
        for n in 1..=95 {
            session.tick();
            assert_eq!(session.phase(), Phase::Playing, "died early on tick {n}");
            assert_eq!(session.snake().head(), PixelPos::new(48 + 2 * n, 144));
        }
        session.tick();
        assert_eq!(session.snake().head(), PixelPos::new(240, 144));
        assert_eq!(session.phase(), Phase::GameOver);
        // Dead sessions stay put.
        session.tick();
        assert_eq!(session.snake().head(), PixelPos::new(240, 144));
        assert_eq!(session.phase(), Phase::GameOver);
    }

    #[test]
    fn fruit_frame_effects() {
        // Fruit at tile (5, 9): first entered when the head reaches x = 80
        // on tick 16.
        let template = arena(&[], &[(5, 9)], &[]);
        let mut session = Session::new(&template);
        for _ in 0..15 {
            session.tick();
        }
        assert_eq!(session.score(), 0);
        assert_eq!(session.snake().len(), 3);
        session.tick();
        assert_eq!(session.level().fruits_collected(), 1);
        assert_eq!(session.score(), consts::FRUIT_SCORE);
        assert_eq!(session.snake().len(), 4);
        assert!(!session.level().is_fruit(session.snake().head()));
        // Still inside the same tile next frame; nothing double-counts.
        session.tick();
        assert_eq!(session.level().fruits_collected(), 1);
        assert_eq!(session.score(), consts::FRUIT_SCORE);
        assert_eq!(session.snake().len(), 4);
    }

    #[test]
    fn fruit_counter_is_monotonic_and_bounded() {
        let template = arena(&[], &[(5, 9), (8, 9)], &[]);
        let mut session = Session::new(&template);
        let mut last = 0;
        for _ in 0..300 {
            session.tick();
            let collected = session.level().fruits_collected();
            assert!(collected >= last, "counter went backwards");
            assert!(collected <= session.level().total_fruits());
            last = collected;
        }
        assert_eq!(last, 2);
    }

    #[test]
    fn exit_requires_quota() {
        // Exit at tile (5, 9) before the fruit at (8, 9): crossing the gate
        // with the quota unmet does nothing.
        let template = arena(&[], &[(8, 9)], &[(5, 9)]);
        let mut session = Session::new(&template);
        for _ in 0..24 {
            session.tick();
        }
        // Head is at x = 96, past the gate, quota still open at that time.
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.level().fruits_collected(), 0);
    }

    #[test]
    fn victory_on_gate_with_quota_met() {
        // Fruit at (5, 9), exit at (8, 9): fruit on tick 16, gate first
        // entered when x reaches 128 on tick 40.
        let template = arena(&[], &[(5, 9)], &[(8, 9)]);
        let mut session = Session::new(&template);
        for n in 1..=39 {
            session.tick();
            assert_eq!(session.phase(), Phase::Playing, "won early on tick {n}");
        }
        session.tick();
        assert_eq!(session.phase(), Phase::Victory);
        assert_eq!(session.score(), consts::FRUIT_SCORE);
    }

    #[test]
    fn steering_changes_course() {
        let template = arena(&[], &[], &[]);
        let mut session = Session::new(&template);
        session.steer(Direction::North);
        session.tick();
        assert_eq!(session.snake().head(), PixelPos::new(48, 142));
        // Reverse of the current heading is ignored.
        session.steer(Direction::South);
        session.tick();
        assert_eq!(session.snake().head(), PixelPos::new(48, 140));
    }

    #[test]
    fn restart_resets_everything() {
        let template = arena(&[], &[(5, 9)], &[]);
        let mut session = Session::new(&template);
        let initial = session.clone();
        for _ in 0..50 {
            session.tick();
        }
        assert_ne!(session.score(), 0);
        let restarted = Session::new(&template);
        assert_eq!(restarted, initial);
        assert_eq!(restarted.score(), 0);
        assert_eq!(restarted.level().fruits_collected(), 0);
        assert_eq!(restarted.snake().head(), PixelPos::new(48, 144));
    }
}
