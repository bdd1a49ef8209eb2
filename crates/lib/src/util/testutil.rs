//! Test utilities for tmpbuild-lib.
//!
//! Tests never need a real Go toolchain: [`TestProject`] installs a fake
//! compiler that "builds" by concatenating the `.go` files (shell snippets)
//! behind a `#!/bin/sh` line, so the artifact behaves like its sources say.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::Config;

pub const FAKE_COMPILER: &str = "fakec";

const FAKE_COMPILER_SCRIPT: &str = r#"if [ "$1" != "build" ] || [ "$2" != "-o" ]; then
  echo "usage: fakec build -o OUT DIR" >&2
  exit 2
fi
{ echo '#!/bin/sh'; cat "$4"/*.go; } > "$3" || exit 1
chmod +x "$3""#;

/// Set the executable bits on `path`.
#[cfg(unix)]
pub fn make_executable(path: &Path) {
  use std::os::unix::fs::PermissionsExt;

  let mut perms = std::fs::metadata(path).unwrap().permissions();
  perms.set_mode(0o755);
  std::fs::set_permissions(path, perms).unwrap();
}

/// Write a `/bin/sh` script named `name` into `dir` and make it executable.
#[cfg(unix)]
pub fn write_executable(dir: &Path, name: &str, body: &str) -> PathBuf {
  let path = dir.join(name);
  std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
  make_executable(&path);
  path
}

/// Scratch layout: `src/` for sources, `bin/` for the fake compiler, `tmp/` for artifacts.
pub struct TestProject {
  temp: TempDir,
  src: PathBuf,
  bin: PathBuf,
  tmp: PathBuf,
}

impl TestProject {
  #[cfg(unix)]
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    for dir in ["src", "bin", "tmp"] {
      std::fs::create_dir(temp.path().join(dir)).unwrap();
    }
    let src = temp.path().join("src");
    let bin = temp.path().join("bin");
    let tmp = temp.path().join("tmp");
    write_executable(&bin, FAKE_COMPILER, FAKE_COMPILER_SCRIPT);
    Self { temp, src, bin, tmp }
  }

  pub fn root(&self) -> &Path {
    self.temp.path()
  }

  pub fn src(&self) -> &Path {
    &self.src
  }

  pub fn bin(&self) -> &Path {
    &self.bin
  }

  pub fn tmp(&self) -> &Path {
    &self.tmp
  }

  pub fn write_source(&self, name: &str, body: &str) {
    std::fs::write(self.src().join(name), format!("{}\n", body)).unwrap();
  }

  /// Number of files currently in the artifact directory.
  pub fn tmp_entries(&self) -> usize {
    std::fs::read_dir(self.tmp()).unwrap().count()
  }

  /// Config pointing at the fake compiler and the scratch temp dir.
  pub fn config(&self) -> Config {
    Config {
      compiler: FAKE_COMPILER.to_string(),
      temp_dir: Some(self.tmp.clone()),
      search_path: Some(self.bin.clone().into_os_string()),
      ..Config::default()
    }
  }
}
