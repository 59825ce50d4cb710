mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod level;
mod levels_screen;
mod menu;
mod pixel;
mod util;
mod warning;
use crate::app::App;
use crate::cli::{Args, Invocation, USAGE};
use crate::config::Config;
use crate::level::template::LevelTemplate;
use crate::util::Globals;
use crate::warning::Warning;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Invocation::parse() {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Help) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Invocation::Version) => {
            println!(concat!(
                env!("CARGO_PKG_NAME"),
                " ",
                env!("CARGO_PKG_VERSION")
            ));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("gatesnake: {e}");
            return ExitCode::from(2);
        }
    };
    let (globals, warnings) = startup(&args);
    let terminal = ratatui::init();
    let r = App::new(globals, warnings).run(terminal);
    ratatui::restore();
    io_exit(r)
}

/// Assemble the game's settings from the command line and the configuration
/// file.  Problems with either are reported as warnings rather than aborting
/// the program; the built-in defaults fill in for whatever failed to load.
fn startup(args: &Args) -> (Globals, Vec<Warning>) {
    let mut warnings = Vec::new();
    let config = load_config(args).unwrap_or_else(|e| {
        warnings.push(Warning::from(e));
        Config::default()
    });
    let mut globals = Globals {
        frame_period: config.frame_period(),
        ..Globals::default()
    };
    if let Some(path) = args.level.as_deref().or(config.level_file.as_deref()) {
        match LevelTemplate::load(path) {
            Ok(template) => globals.template = template,
            Err(e) => warnings.push(Warning::from(e)),
        }
    }
    (globals, warnings)
}

fn load_config(args: &Args) -> Result<Config, config::ConfigError> {
    // A config file named on the command line must exist; the default one
    // need not.
    match args.config.as_deref() {
        Some(path) => Config::load(path, false),
        None => Config::load(&Config::default_path()?, true),
    }
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
