use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directives
pub(crate) const LOG_ENV_VAR: &str = "GRIDSNAKE_LOG";

const DEFAULT_FILTER: &str = "info";

/// Send log messages to the file at `path`, appending if it already exists.
///
/// The terminal is taken over by the game display, so logging is only ever
/// done to a file.  Messages are filtered according to
/// [`LOG_ENV_VAR`], defaulting to `info`.
pub(crate) fn init(path: &Path) -> Result<(), LogError> {
    let file = open(path)?;
    subscriber(file).try_init().map_err(LogError::Init)
}

fn open(path: &Path) -> Result<fs_err::File, LogError> {
    fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(LogError::Open)
}

/// Build a subscriber that writes plain-text log lines to `file`
fn subscriber(file: fs_err::File) -> impl Subscriber + Send + Sync + 'static {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish()
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),
    #[error("failed to install logger")]
    Init(#[source] tracing_subscriber::util::TryInitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_plain_lines() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("gridsnake.log");
        let file = open(&path).unwrap();
        tracing::subscriber::with_default(subscriber(file), || {
            tracing::info!(level = 3, "Snake ate food");
            tracing::trace!("Ignoring reversal");
        });
        let log = fs_err::read_to_string(&path).unwrap();
        assert_eq!(log.lines().count(), 1, "{log:?}");
        assert!(log.contains(" INFO "), "{log:?}");
        assert!(log.contains("Snake ate food level=3"), "{log:?}");
        assert!(!log.contains('\x1B'), "{log:?}");
    }

    #[test]
    fn appends_to_existing_file() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("gridsnake.log");
        fs_err::write(&path, "earlier session\n").unwrap();
        let file = open(&path).unwrap();
        tracing::subscriber::with_default(subscriber(file), || {
            tracing::warn!("Starting game");
        });
        let log = fs_err::read_to_string(&path).unwrap();
        let mut lines = log.lines();
        assert_eq!(lines.next(), Some("earlier session"));
        assert!(lines.next().is_some_and(|ln| ln.contains("Starting game")));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn missing_directory() {
        let tmpdir = tempfile::tempdir().unwrap();
        let r = open(&tmpdir.path().join("nonexistent").join("gridsnake.log"));
        assert!(matches!(r, Err(LogError::Open(_))));
    }
}
