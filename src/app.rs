use crate::command::Command;
use crate::game::Game;
use crate::levels_screen::LevelsScreen;
use crate::menu::MainMenu;
use crate::util::Globals;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::read;
use ratatui::{backend::Backend, Terminal};
use std::io;

#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,

    /// Warnings from startup, shown one at a time (last first) as popups
    /// over the main menu until the user dismisses them
    warnings: Vec<Warning>,
}

impl App {
    pub(crate) fn new(globals: Globals, warnings: Vec<Warning>) -> App {
        let screen = Screen::Main(MainMenu::new(globals));
        App { screen, warnings }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.screen {
            Screen::Main(ref menu) => {
                terminal.draw(|frame| {
                    menu.draw(frame);
                    if let Some(warning) = self.warnings.last() {
                        frame.render_widget(warning, frame.area());
                    }
                })?;
            }
            Screen::Levels(ref levels) => {
                terminal.draw(|frame| levels.draw(frame))?;
            }
            Screen::Game(ref game) => {
                terminal.draw(|frame| game.draw(frame))?;
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        if let Some(warning) = self.warnings.last_mut() {
            let outcome = read()?
                .as_key_press_event()
                .and_then(Command::from_key_event)
                .and_then(|cmd| warning.handle_command(cmd));
            match outcome {
                Some(WarningOutcome::Dismissed) => {
                    self.warnings.pop();
                }
                Some(WarningOutcome::Quit) => self.screen = Screen::Quit,
                None => (),
            }
            return Ok(());
        }
        match self.screen {
            Screen::Main(ref mut menu) => {
                if let Some(screen) = menu.process_input()? {
                    self.screen = screen;
                }
            }
            Screen::Levels(ref mut levels) => {
                if let Some(screen) = levels.process_input()? {
                    self.screen = screen;
                }
            }
            Screen::Game(ref mut game) => {
                if let Some(screen) = game.process_input()? {
                    self.screen = screen;
                }
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Main(MainMenu),
    Levels(LevelsScreen),
    Game(Game),
    Quit,
}
