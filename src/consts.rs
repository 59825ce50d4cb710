//! Assorted constants & hard-coded configuration
use crate::pixel::PixelPos;
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Default time between simulation frames (~60 FPS).  Overridable from the
/// configuration file.
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// How far the snake's head travels per frame, in pixels
pub(crate) const SNAKE_SPEED: i32 = 2;

/// Points awarded for each fruit collected
pub(crate) const FRUIT_SCORE: u32 = 10;

/// Spawn position used when a level document lacks a `snake_spawn` object
pub(crate) const DEFAULT_SPAWN: PixelPos = PixelPos::new(48, 144);

/// Glyph for the snake's head when it is heading north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is heading south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is heading east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '>';

/// Glyph for the snake's head when it is heading west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '<';

/// Glyph for the middle parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the snake's tail
pub(crate) const SNAKE_TAIL_SYMBOL: char = '∘';

/// Glyph for the fruit
pub(crate) const FRUIT_SYMBOL: char = '●';

/// Glyph for wall tiles
pub(crate) const WALL_SYMBOL: char = '█';

/// Glyph for the exit gate
pub(crate) const EXIT_SYMBOL: char = '▤';

/// Glyph for the snake's head when it's collided with a wall or with itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the fruit
pub(crate) const FRUIT_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for wall tiles
pub(crate) const WALL_STYLE: Style = Style::new().fg(Color::Gray);

/// Style for the exit gate while the fruit quota is unmet
pub(crate) const EXIT_CLOSED_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Style for the exit gate once every fruit has been collected
pub(crate) const EXIT_OPEN_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
