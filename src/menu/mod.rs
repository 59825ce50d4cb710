mod widgets;
use self::widgets::{Instructions, Logo};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::game::Game;
use crate::levels_screen::LevelsScreen;
use crate::util::{get_display_area, EnumExt, Globals};
use crossterm::event::{read, Event};
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
    Frame,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MainMenu {
    selection: MenuItem,
    globals: Globals,
}

impl MainMenu {
    pub(crate) fn new(globals: Globals) -> Self {
        MainMenu {
            selection: MenuItem::min(),
            globals,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit => Some(Screen::Quit),
            Command::P => Some(self.activate(MenuItem::Play)),
            Command::L => Some(self.activate(MenuItem::Levels)),
            Command::Q => Some(Screen::Quit),
            Command::Enter => Some(self.activate(self.selection)),
            Command::Up => {
                if let Some(item) = self.selection.prev() {
                    self.selection = item;
                }
                None
            }
            Command::Down => {
                if let Some(item) = self.selection.next() {
                    self.selection = item;
                }
                None
            }
            _ => None,
        }
    }

    fn activate(&self, item: MenuItem) -> Screen {
        match item {
            MenuItem::Play => Screen::Game(Game::new(self.globals.clone())),
            MenuItem::Levels => Screen::Levels(LevelsScreen::new(self.globals.clone())),
            MenuItem::Quit => Screen::Quit,
        }
    }

    fn button_line(&self, item: MenuItem) -> Line<'static> {
        let style = if self.selection == item {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        };
        let (label, key) = match item {
            MenuItem::Play => ("Play", "p"),
            MenuItem::Levels => ("Levels", "l"),
            MenuItem::Quit => ("Quit", "q"),
        };
        Line::from_iter([
            Span::styled(format!("[{label} ("), style),
            Span::styled(key, consts::KEY_STYLE.patch(style)),
            Span::styled(")]", style),
        ])
        .centered()
    }
}

impl Widget for &MainMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [logo_area, instructions_area, play_area, levels_area, quit_area] = Layout::vertical([
            Logo::HEIGHT,
            Instructions::HEIGHT,
            1,
            1,
            1,
        ])
        .flex(Flex::Start)
        .spacing(1)
        .areas(display);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);

        let [instructions_area] = Layout::horizontal([Instructions::WIDTH])
            .flex(Flex::Center)
            .areas(instructions_area);
        Instructions.render(instructions_area, buf);

        self.button_line(MenuItem::Play).render(play_area, buf);
        self.button_line(MenuItem::Levels).render(levels_area, buf);
        self.button_line(MenuItem::Quit).render(quit_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
enum MenuItem {
    Play,
    Levels,
    Quit,
}
