//! Shared test helpers for CLI integration tests.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Fake compiler: `build -o OUT DIR` concatenates `DIR/*.go` behind a shebang.
const FAKE_COMPILER: &str = r#"if [ "$1" != "build" ] || [ "$2" != "-o" ]; then
  echo "usage: fakec build -o OUT DIR" >&2
  exit 2
fi
{ echo '#!/bin/sh'; cat "$4"/*.go; } > "$3" || exit 1
chmod +x "$3""#;

/// Program that stays quiet in a nested run and fails otherwise.
pub const QUIET_NESTED: &str = r#"if [ "$MODE" = "test" ]; then exit 0; fi
exit 5"#;

/// Program that announces a nested run.
pub const LOUD_NESTED: &str = r#"if [ "$MODE" = "test" ]; then echo TEST; exit 0; fi
exit 5"#;

/// Isolated test environment.
///
/// Each test gets its own `src/` (sources, also the working directory),
/// `bin/` (compilers) and `tmp/` (artifacts).
pub struct TestEnv {
  pub temp: TempDir,
  root: PathBuf,
}

impl TestEnv {
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    let root = dunce::canonicalize(temp.path()).unwrap();
    for dir in ["src", "bin", "tmp"] {
      std::fs::create_dir(root.join(dir)).unwrap();
    }
    let env = Self { temp, root };
    env.write_compiler("fakec", FAKE_COMPILER);
    env
  }

  pub fn src(&self) -> PathBuf {
    self.root.join("src")
  }

  pub fn tmp(&self) -> PathBuf {
    self.root.join("tmp")
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn write_source(&self, name: &str, body: &str) {
    std::fs::write(self.src().join(name), format!("{}\n", body)).unwrap();
  }

  /// Write an executable `/bin/sh` script into `bin/` and return its path.
  pub fn write_compiler(&self, name: &str, body: &str) -> PathBuf {
    let path = self.root.join("bin").join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
  }

  /// Files left in the artifact directory.
  pub fn tmp_entries(&self) -> Vec<PathBuf> {
    std::fs::read_dir(self.tmp())
      .unwrap()
      .map(|entry| entry.unwrap().path())
      .collect()
  }

  /// Get a pre-configured Command for the tmpbuild binary.
  ///
  /// - runs in `src/`
  /// - `TMPBUILD_COMPILER`: the fake compiler
  /// - `TMPBUILD_TMPDIR`: the isolated artifact directory
  /// - `MODE` removed so the outer run is never mistaken for a nested one
  pub fn tmpbuild_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("tmpbuild");
    cmd.current_dir(self.src());
    cmd.env("TMPBUILD_COMPILER", self.root.join("bin").join("fakec"));
    cmd.env("TMPBUILD_TMPDIR", self.tmp());
    cmd.env_remove("TMPBUILD_BUILD_ID");
    cmd.env_remove("MODE");
    cmd
  }
}
