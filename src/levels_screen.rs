use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::game::Game;
use crate::level::FRUIT_TILE;
use crate::menu::MainMenu;
use crate::util::{center_rect, get_display_area, Globals};
use crossterm::event::{read, Event};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Size},
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
    Frame,
};

/// The level-select screen.  It currently lists the one template the
/// application was started with; picking it starts a fresh session on it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct LevelsScreen {
    globals: Globals,
}

impl LevelsScreen {
    const POINTER_WIDTH: u16 = 2;
    const NAME_WIDTH: u16 = 20;
    const DIMS_WIDTH: u16 = 7;
    const GUTTER: u16 = 2;
    const FRUITS_WIDTH: u16 = 9;
    const WIDTH: u16 = 2 /* for border */ + 2 /* for padding */ + Self::POINTER_WIDTH + Self::NAME_WIDTH + Self::DIMS_WIDTH + Self::GUTTER + Self::FRUITS_WIDTH;

    pub(crate) fn new(globals: Globals) -> Self {
        LevelsScreen { globals }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Enter => Some(Screen::Game(Game::new(self.globals.clone()))),
            Command::Esc | Command::M => Some(Screen::Main(MainMenu::new(self.globals.clone()))),
            Command::Quit | Command::Q => Some(Screen::Quit),
            _ => None,
        }
    }

    fn entry_line(&self) -> Line<'static> {
        let template = &self.globals.template;
        let fruits = template.fruit.iter().filter(|&&c| c == FRUIT_TILE).count();
        let s = format!(
            "{pointer:pwidth$}{name:<nwidth$}{dims:^dwidth$}{space:gutter$}{fruits:>2} fruits",
            pointer = "»",
            pwidth = usize::from(Self::POINTER_WIDTH),
            name = template.name,
            nwidth = usize::from(Self::NAME_WIDTH),
            dims = format!("{}×{}", template.width, template.height),
            dwidth = usize::from(Self::DIMS_WIDTH),
            space = "",
            gutter = usize::from(Self::GUTTER),
        );
        Line::from(Span::styled(s, consts::MENU_SELECTION_STYLE))
    }
}

impl Widget for &LevelsScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let outer = center_rect(display, Size::new(LevelsScreen::WIDTH, 5));
        let [block_area, hint_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)])
                .spacing(1)
                .areas(outer);
        let block = Block::bordered()
            .title(" Levels ")
            .padding(Padding::horizontal(1));
        let inner = block.inner(block_area);
        block.render(block_area, buf);
        self.entry_line().render(inner, buf);
        Line::from_iter([
            Span::raw("Play ("),
            Span::styled("Enter", consts::KEY_STYLE),
            Span::raw(") — Back ("),
            Span::styled("m", consts::KEY_STYLE),
            Span::raw(") — Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn draw() {
        let screen = LevelsScreen::new(Globals::default());
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        screen.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "                  ┌ Levels ──────────────────────────────────┐                  ",
            "                  │ » Walled Orchard       30×20    5 fruits │                  ",
            "                  └──────────────────────────────────────────┘                  ",
            "",
            "                  Play (Enter) — Back (m) — Quit (q)                            ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        expected.set_style(Rect::new(20, 11, 40, 1), consts::MENU_SELECTION_STYLE);
        expected.set_style(Rect::new(24, 14, 5, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(39, 14, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(50, 14, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn choose_level() {
        let mut screen = LevelsScreen::new(Globals::default());
        assert!(matches!(
            screen.handle_event(Event::Key(KeyCode::Enter.into())),
            Some(Screen::Game(_))
        ));
    }

    #[test]
    fn back_to_menu() {
        let mut screen = LevelsScreen::new(Globals::default());
        assert!(matches!(
            screen.handle_event(Event::Key(KeyCode::Esc.into())),
            Some(Screen::Main(_))
        ));
        assert!(matches!(
            screen.handle_event(Event::Key(KeyCode::Char('m').into())),
            Some(Screen::Main(_))
        ));
        assert!(matches!(
            screen.handle_event(Event::Key(KeyCode::Char('q').into())),
            Some(Screen::Quit)
        ));
    }
}
