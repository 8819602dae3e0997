use lexopt::prelude::*;
use std::num::NonZeroU64;
use std::path::PathBuf;

pub(crate) const USAGE: &str = "\
Usage: gridsnake [<options>]

Steer the snake with the arrow keys or WASD; space pauses, q quits.

Options:
  -c, --config <PATH>       Read configuration from the given file
      --no-config           Do not read any configuration file
  -d, --tick-delay <MS>     Milliseconds between moves of the snake
  -l, --log-file <PATH>     Write log messages to the given file
  -h, --help                Display this help message and exit
  -V, --version             Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: ConfigSource,
    pub(crate) tick_delay: Option<NonZeroU64>,
    pub(crate) log_file: Option<PathBuf>,
}

/// Where to read the configuration file from
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) enum ConfigSource {
    /// The default location; skipped silently if the file does not exist
    #[default]
    Default,
    /// A path given on the command line, which must exist
    Path(PathBuf),
    /// Don't read a configuration file
    None,
}

impl Command {
    pub(crate) fn from_env() -> Result<Command, lexopt::Error> {
        Command::from_parser(lexopt::Parser::from_env())
    }

    fn from_parser(mut parser: lexopt::Parser) -> Result<Command, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => {
                    args.config = ConfigSource::Path(PathBuf::from(parser.value()?));
                }
                Long("no-config") => args.config = ConfigSource::None,
                Short('d') | Long("tick-delay") => {
                    args.tick_delay = Some(parser.value()?.parse()?);
                }
                Short('l') | Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Short('h') | Long("help") => return Ok(Command::Help),
                Short('V') | Long("version") => return Ok(Command::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(args))
    }
}
