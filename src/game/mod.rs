mod direction;
mod session;
mod snake;
use self::direction::Direction;
use self::session::{Phase, Session};
use self::snake::SegmentRole;
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::menu::MainMenu;
use crate::pixel::PixelPos;
use crate::util::{center_rect, get_display_area, Globals};
use crossterm::event::{poll, read, Event};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::time::Instant;

/// The gameplay screen: one session plus the frame clock that drives it
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game {
    session: Session,
    globals: Globals,
    next_tick: Option<Instant>,
}

impl Game {
    pub(crate) fn new(globals: Globals) -> Game {
        let session = Session::new(&globals.template);
        Game {
            session,
            globals,
            next_tick: None,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.globals.frame_period);
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.session.tick();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match self.session.phase() {
            Phase::Playing => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::Quit => return Some(Screen::Quit),
                Command::Up => self.session.steer(Direction::North),
                Command::Left => self.session.steer(Direction::West),
                Command::Down => self.session.steer(Direction::South),
                Command::Right => self.session.steer(Direction::East),
                _ => (),
            },
            Phase::GameOver | Phase::Victory => {
                match Command::from_key_event(event.as_key_press_event()?)? {
                    Command::R => return Some(Screen::Game(Game::new(self.globals.clone()))),
                    Command::M => {
                        return Some(Screen::Main(MainMenu::new(self.globals.clone())));
                    }
                    Command::Quit | Command::Q => return Some(Screen::Quit),
                    _ => (),
                }
            }
        }
        None
    }

    fn running(&self) -> bool {
        self.session.phase() == Phase::Playing
    }
}

impl Widget for &Game {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        let level = self.session.level();
        Line::styled(
            format!(
                " Score: {}   Fruits: {}/{}",
                self.session.score(),
                level.fruits_collected(),
                level.total_fruits(),
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let mut block_size = level.size();
        block_size.width = block_size.width.saturating_add(2);
        block_size.height = block_size.height.saturating_add(2);
        let block_area = center_rect(block_area, block_size);
        Block::bordered().render(block_area, buf);

        let level_area = block_area.inner(Margin::new(1, 1));
        let mut canvas = Canvas {
            area: level_area,
            buf,
        };
        for pos in level.walls() {
            canvas.draw_cell(pos, consts::WALL_SYMBOL, consts::WALL_STYLE);
        }
        for pos in level.fruits() {
            canvas.draw_cell(pos, consts::FRUIT_SYMBOL, consts::FRUIT_STYLE);
        }
        let exit_style = if level.exit_open() {
            consts::EXIT_OPEN_STYLE
        } else {
            consts::EXIT_CLOSED_STYLE
        };
        for pos in level.exits() {
            canvas.draw_cell(pos, consts::EXIT_SYMBOL, exit_style);
        }
        let snake = self.session.snake();
        let tile_size = level.tile_size();
        for seg in snake.segments() {
            let Some(pos) = cell_of(seg.pos, tile_size) else {
                continue;
            };
            match seg.role {
                SegmentRole::Head => (),
                SegmentRole::Body => {
                    canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
                }
                SegmentRole::Tail => {
                    canvas.draw_cell(pos, consts::SNAKE_TAIL_SYMBOL, consts::SNAKE_STYLE);
                }
            }
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if let Some(pos) = cell_of(snake.head(), tile_size) {
            if self.session.phase() == Phase::GameOver {
                canvas.draw_cell(pos, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            } else {
                canvas.draw_cell(pos, snake.head_symbol(), consts::SNAKE_STYLE);
            }
        }

        match self.session.phase() {
            Phase::Playing => (),
            Phase::GameOver | Phase::Victory => {
                let msg = if self.session.phase() == Phase::Victory {
                    " — VICTORY! —"
                } else {
                    " — GAME OVER —"
                };
                Span::from(msg).render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Choose One: Restart ("),
                    Span::styled("r", consts::KEY_STYLE),
                    Span::raw(") — Main Menu ("),
                    Span::styled("m", consts::KEY_STYLE),
                    Span::raw(") — Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
        }
    }
}

/// The buffer cell covering a pixel position, or `None` for positions left
/// or above the level area
fn cell_of(pos: PixelPos, tile_size: i32) -> Option<Position> {
    let (col, row) = pos.tile(tile_size);
    let x = u16::try_from(col).ok()?;
    let y = u16::try_from(row).ok()?;
    Some(Position { x, y })
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if !self.area.contains(Position { x, y }) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}
