mod app;
mod args;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod popup;
mod ticker;
mod util;
use crate::app::App;
use crate::args::{Arguments, Command, ConfigSource};
use crate::config::Config;
use crate::ticker::TerminalEvents;
use anyhow::Context;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
};
use std::io::{self, ErrorKind, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match Command::from_env() {
        Ok(Command::Run(args)) => match run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("gridsnake: {e:?}");
                ExitCode::FAILURE
            }
        },
        Ok(Command::Help) => {
            print!("{}", args::USAGE);
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprint!("{}", args::USAGE);
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    if let Some(path) = args.log_file.as_deref() {
        logging::init(path)
            .with_context(|| format!("failed to set up logging to {}", path.display()))?;
    }
    let mut config = match args.config {
        ConfigSource::Default => {
            let path = Config::default_path()?;
            Config::load(&path, true)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        ConfigSource::Path(path) => Config::load(&path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        ConfigSource::None => Config::default(),
    };
    if let Some(ms) = args.tick_delay {
        config.timing.set_tick_delay(ms);
    }
    tracing::debug!(?config, "Loaded configuration");
    let terminal = ratatui::init();
    let r = with_focus_reporting(io::stdout(), || {
        App::new(&config, rand::rng()).run(terminal, &mut TerminalEvents)
    });
    ratatui::restore();
    r.map_err(Into::into)
}

/// Run `func` with focus-change reporting turned on for the terminal behind
/// `out`.  If `func` succeeds but reporting can't be turned back off, that
/// error is returned instead.
fn with_focus_reporting<W, T, F>(mut out: W, func: F) -> io::Result<T>
where
    W: Write,
    F: FnOnce() -> io::Result<T>,
{
    execute!(out, EnableFocusChange)?;
    let r = func();
    let cleanup = execute!(out, DisableFocusChange);
    let value = r?;
    cleanup?;
    Ok(value)
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}
