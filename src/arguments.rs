use super::*;

#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Arguments {
  /// Source files to lex
  #[arg(required = true)]
  files: Vec<PathBuf>,
  /// Whether integers may carry redundant leading zeros
  #[arg(long, value_enum, default_value_t)]
  leading_zeros: LeadingZeros,
  /// Log debug output to stderr
  #[arg(short, long)]
  verbose: bool,
}

impl Arguments {
  fn lex_file(path: &Path, config: LexerConfig) -> Result<Vec<Token>, Error> {
    let src = fs::read_to_string(path).map_err(|source| Error::Io {
      path: path.to_owned(),
      source,
    })?;

    let tokens = Lexer::with_config(&src, config).lex().map_err(|source| {
      Error::Lex {
        path: path.to_owned(),
        source,
      }
    })?;

    debug!(path = %path.display(), tokens = tokens.len(), "lexed file");

    Ok(tokens)
  }

  fn report(
    stdout: &mut impl Write,
    path: &Path,
    header: bool,
    result: Result<Vec<Token>, Error>,
  ) -> Result<(), Error> {
    if header {
      writeln!(stdout, "==> {} <==", path.display()).map_err(Error::Stdout)?;
    }

    for token in result? {
      writeln!(stdout, "{token}").map_err(Error::Stdout)?;
    }

    Ok(())
  }

  pub(crate) fn run(self) -> Result<(), Vec<Error>> {
    logging::init(self.verbose).map_err(|error| vec![error])?;

    let config = LexerConfig::default().leading_zeros(self.leading_zeros);

    debug!(files = self.files.len(), ?config, "lexing");

    let results = self
      .files
      .par_iter()
      .map(|path| Self::lex_file(path, config))
      .collect::<Vec<_>>();

    let mut stdout = io::stdout().lock();

    let mut errors = Vec::new();

    for (path, result) in self.files.iter().zip(results) {
      if let Err(error) =
        Self::report(&mut stdout, path, self.files.len() > 1, result)
      {
        errors.push(error);
      }
    }

    if errors.is_empty() {
      Ok(())
    } else {
      Err(errors)
    }
  }
}
