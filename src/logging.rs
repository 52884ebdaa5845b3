use {
  super::*,
  tracing_subscriber::{EnvFilter, fmt, prelude::*},
};

pub(crate) fn init(verbose: bool) -> Result<(), Error> {
  let filter = if verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::new("warn")
  };

  let layer = fmt::layer()
    .with_writer(io::stderr)
    .with_target(false)
    .without_time();

  tracing_subscriber::registry()
    .with(filter)
    .with(layer)
    .try_init()?;

  Ok(())
}
