use {
  arguments::Arguments,
  clap::{Parser, ValueEnum},
  config::LexerConfig,
  error::Error,
  error_kind::ErrorKind,
  leading_zeros::LeadingZeros,
  lex_error::LexError,
  lexer::Lexer,
  position::Position,
  rayon::prelude::*,
  std::{
    fmt::{self, Display, Formatter},
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
    str::Chars,
  },
  token::Token,
  token_kind::TokenKind,
  tracing::{debug, trace},
};

mod arguments;
mod config;
mod error;
mod error_kind;
mod leading_zeros;
mod lex_error;
mod lexer;
mod logging;
mod position;
mod token;
mod token_kind;

fn main() {
  if let Err(errors) = Arguments::parse().run() {
    for error in errors {
      eprintln!("error: {error}");
    }

    process::exit(1);
  }
}
