use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("failed to read {}: {source}", .path.display())]
  Io { path: PathBuf, source: io::Error },
  #[error("{source}\n --> {}:{}", .path.display(), .source.position)]
  Lex { path: PathBuf, source: LexError },
  #[error("failed to write to stdout: {0}")]
  Stdout(io::Error),
  #[error("failed to initialize logging: {0}")]
  Logging(#[from] tracing_subscriber::util::TryInitError),
}
