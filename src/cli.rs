use lexopt::{Arg, Parser};
use std::path::PathBuf;

pub(crate) static USAGE: &str = concat!(
    "Usage: gatesnake [options] [LEVEL_FILE]\n",
    "\n",
    "Guide the snake, collect every fruit, and escape through the gate.\n",
    "\n",
    "Arguments:\n",
    "  LEVEL_FILE        Tiled-style JSON level to play instead of the\n",
    "                    built-in level\n",
    "\n",
    "Options:\n",
    "  -c, --config <FILE>   Read configuration from <FILE>\n",
    "  -h, --help            Show this help message and exit\n",
    "  -V, --version         Show the program version and exit\n",
);

/// Command-line arguments for a normal run
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Args {
    pub(crate) config: Option<PathBuf>,
    pub(crate) level: Option<PathBuf>,
}

/// What the command line asked the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Invocation {
    Run(Args),
    Help,
    Version,
}

impl Invocation {
    pub(crate) fn parse() -> Result<Invocation, lexopt::Error> {
        Invocation::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut args = Args::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Value(val) if args.level.is_none() => args.level = Some(PathBuf::from(val)),
                other => return Err(other.unexpected()),
            }
        }
        Ok(Invocation::Run(args))
    }
}
