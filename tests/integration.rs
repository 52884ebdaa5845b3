use {
  executable_path::executable_path,
  indoc::indoc,
  pretty_assertions::assert_eq,
  std::{fs::File, io::Write, process::Command, str},
  tempfile::TempDir,
  unindent::Unindent,
};

type Result<T = (), E = Box<dyn std::error::Error>> = std::result::Result<T, E>;

struct Test<'a> {
  args: Vec<&'a str>,
  expected_status: i32,
  expected_stderr: String,
  expected_stdout: String,
  programs: Vec<(&'a str, &'a str)>,
  tempdir: TempDir,
}

impl<'a> Test<'a> {
  fn new() -> Result<Self> {
    Ok(Self {
      args: Vec::new(),
      expected_status: 0,
      expected_stderr: String::new(),
      expected_stdout: String::new(),
      programs: Vec::new(),
      tempdir: TempDir::new()?,
    })
  }

  fn arg(mut self, arg: &'a str) -> Self {
    self.args.push(arg);
    self
  }

  fn expected_status(self, expected_status: i32) -> Self {
    Self {
      expected_status,
      ..self
    }
  }

  fn expected_stderr(self, expected_stderr: &str) -> Self {
    Self {
      expected_stderr: expected_stderr.unindent(),
      ..self
    }
  }

  fn expected_stdout(self, expected_stdout: &str) -> Self {
    Self {
      expected_stdout: expected_stdout.unindent(),
      ..self
    }
  }

  fn program(self, program: &'a str) -> Self {
    self.file("program.plc", program)
  }

  fn file(mut self, name: &'a str, program: &'a str) -> Self {
    self.programs.push((name, program));
    self
  }

  fn run(self) -> Result {
    let mut command = Command::new(executable_path(env!("CARGO_PKG_NAME")));

    command.current_dir(self.tempdir.path()).args(&self.args);

    for (name, program) in &self.programs {
      let mut file = File::create(self.tempdir.path().join(name))?;
      write!(file, "{}", program.unindent())?;
      command.arg(name);
    }

    let output = command.output().map_err(|e| {
      format!(
        "Failed to execute command `{}`: {}",
        command.get_program().to_string_lossy(),
        e
      )
    })?;

    let stderr = str::from_utf8(&output.stderr)?;

    if self.expected_stderr.is_empty() && !stderr.is_empty() {
      panic!("Expected empty stderr, but received: {}", stderr);
    } else {
      assert_eq!(stderr, self.expected_stderr, "Stderr mismatch.");
    }

    assert_eq!(str::from_utf8(&output.stdout)?, self.expected_stdout);

    assert_eq!(output.status.code(), Some(self.expected_status));

    Ok(())
  }
}

#[test]
fn declaration() -> Result {
  Test::new()?
    .program("LET x = 5;")
    .expected_stdout(
      r#"
      IDENTIFIER "LET"@0
      IDENTIFIER "x"@4
      OPERATOR "="@6
      INTEGER "5"@8
      OPERATOR ";"@9
      "#,
    )
    .run()
}

#[test]
fn hello_world() -> Result {
  Test::new()?
    .program(indoc! {r#"
      print("Hello, World!");
    "#})
    .expected_stdout(
      r#"
      IDENTIFIER "print"@0
      OPERATOR "("@5
      STRING "\"Hello, World!\""@6
      OPERATOR ")"@21
      OPERATOR ";"@22
      "#,
    )
    .run()
}

#[test]
fn loop_with_comparison() -> Result {
  Test::new()?
    .program(indoc! {"
      WHILE i <= 1.5 DO
          i = i + '\\n';
      END
    "})
    .expected_stdout(
      r#"
      IDENTIFIER "WHILE"@0
      IDENTIFIER "i"@6
      OPERATOR "<="@8
      DECIMAL "1.5"@11
      IDENTIFIER "DO"@15
      IDENTIFIER "i"@22
      OPERATOR "="@24
      IDENTIFIER "i"@26
      OPERATOR "+"@28
      CHARACTER "'\\n'"@30
      OPERATOR ";"@34
      IDENTIFIER "END"@36
      "#,
    )
    .run()
}

#[test]
fn empty_program() -> Result {
  Test::new()?.program("").run()
}

#[test]
fn unterminated_string() -> Result {
  Test::new()?
    .program(indoc! {r#"
      LET x = 1;
      print("unterminated);
    "#})
    .expected_status(1)
    .expected_stderr(
      "
      error: unterminated string literal
       --> program.plc:2:7
      ",
    )
    .run()
}

#[test]
fn invalid_escape() -> Result {
  Test::new()?
    .program(r#"print("invalid\escape");"#)
    .expected_status(1)
    .expected_stderr(
      r"
      error: invalid escape sequence `\e`
       --> program.plc:1:15
      ",
    )
    .run()
}

#[test]
fn leading_zeros_rejected_by_default() -> Result {
  Test::new()?
    .program("LET x = 007;")
    .expected_status(1)
    .expected_stderr(
      "
      error: redundant leading zero in number literal
       --> program.plc:1:9
      ",
    )
    .run()
}

#[test]
fn leading_zeros_allowed() -> Result {
  Test::new()?
    .arg("--leading-zeros")
    .arg("allow")
    .program("LET x = 007;")
    .expected_stdout(
      r#"
      IDENTIFIER "LET"@0
      IDENTIFIER "x"@4
      OPERATOR "="@6
      INTEGER "007"@8
      OPERATOR ";"@11
      "#,
    )
    .run()
}

#[test]
fn multiple_files() -> Result {
  Test::new()?
    .file("a.plc", "LET a = 1;")
    .file("b.plc", "print(a);")
    .expected_stdout(
      r#"
      ==> a.plc <==
      IDENTIFIER "LET"@0
      IDENTIFIER "a"@4
      OPERATOR "="@6
      INTEGER "1"@8
      OPERATOR ";"@9
      ==> b.plc <==
      IDENTIFIER "print"@0
      OPERATOR "("@5
      IDENTIFIER "a"@6
      OPERATOR ")"@7
      OPERATOR ";"@8
      "#,
    )
    .run()
}

#[test]
fn failing_file_does_not_hide_others() -> Result {
  Test::new()?
    .file("bad.plc", "LET c = '';")
    .file("good.plc", "c")
    .expected_status(1)
    .expected_stdout(
      r#"
      ==> bad.plc <==
      ==> good.plc <==
      IDENTIFIER "c"@0
      "#,
    )
    .expected_stderr(
      "
      error: empty character literal
       --> bad.plc:1:9
      ",
    )
    .run()
}

#[test]
fn missing_file() -> Result {
  Test::new()?
    .arg("missing.plc")
    .expected_status(1)
    .expected_stderr(
      "
      error: failed to read missing.plc: No such file or directory (os error 2)
      ",
    )
    .run()
}
