use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn build_does_not_run_program() {
  let env = TestEnv::new();
  let touched = env.root().join("ran");
  env.write_source("main.go", &format!("touch '{}'", touched.display()));

  env
    .tmpbuild_cmd()
    .arg("build")
    .assert()
    .success()
    .stdout(predicate::str::contains("Build complete"))
    .stdout(predicate::str::contains("Artifact removed"))
    .stdout(predicate::str::contains("Program exited").not());

  assert!(!touched.exists());
  assert!(env.tmp_entries().is_empty());
}

#[test]
fn build_reports_size_before_and_missing_after() {
  let env = TestEnv::new();
  env.write_source("main.go", "exit 0");

  env
    .tmpbuild_cmd()
    .arg("build")
    .assert()
    .success()
    .stdout(predicate::str::contains("Before cleanup"))
    .stdout(predicate::str::contains("bytes)"))
    .stdout(predicate::str::contains("After cleanup"))
    .stdout(predicate::str::contains("No such file or directory"));
}

#[test]
fn build_propagates_compiler_failure() {
  let env = TestEnv::new();
  env.write_source("main.go", "exit 0");
  let bad = env.write_compiler("badc", "echo 'main.go:1: syntax error' >&2\nexit 2");

  env
    .tmpbuild_cmd()
    .arg("build")
    .arg("--compiler")
    .arg(&bad)
    .assert()
    .failure()
    .stderr(predicate::str::contains("syntax error"))
    .stdout(predicate::str::contains("badc build` failed: exit code 2"))
    .stdout(predicate::str::contains("Some(").not());

  assert!(env.tmp_entries().is_empty());
}

#[test]
fn build_json_has_no_execution() {
  let env = TestEnv::new();
  env.write_source("main.go", "exit 0");

  let output = env.tmpbuild_cmd().args(["build", "--output", "json"]).output().unwrap();

  assert!(output.status.success());
  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert!(json["execution"].is_null());
  assert!(json["artifact"].as_str().unwrap().contains("tmpbuild.myproj."));
}

#[test]
fn build_respects_extension_flag() {
  let env = TestEnv::new();
  env.write_source("main.go", "exit 0");

  env
    .tmpbuild_cmd()
    .args(["build", "--ext", "rs"])
    .assert()
    .failure()
    .stdout(predicate::str::contains("*.rs"));
}

#[test]
fn relative_dir_and_tmpdir_reach_compiler_absolute() {
  let env = TestEnv::new();
  env.write_source("main.go", "exit 0");
  let log = env.root().join("args.log");
  let logc = env.write_compiler(
    "logc",
    &format!(
      "echo \"$3\" > '{}'\necho \"$4\" >> '{}'\necho 'exit 0' > \"$3\"",
      log.display(),
      log.display()
    ),
  );

  env
    .tmpbuild_cmd()
    .current_dir(env.root())
    .env_remove("TMPBUILD_TMPDIR")
    .args(["build", "src", "--tmpdir", "tmp", "--compiler"])
    .arg(&logc)
    .assert()
    .success()
    .stdout(predicate::str::contains("Build complete"));

  let args = std::fs::read_to_string(&log).unwrap();
  let mut lines = args.lines().map(std::path::Path::new);
  let out = lines.next().unwrap();
  let dir = lines.next().unwrap();
  assert!(out.is_absolute());
  assert!(out.starts_with(env.tmp()));
  assert_eq!(dir, env.src());
  assert!(env.tmp_entries().is_empty());
}

#[test]
fn relative_compiler_resolves_from_working_dir() {
  let env = TestEnv::new();
  env.write_source("main.go", "exit 0");

  env
    .tmpbuild_cmd()
    .current_dir(env.root())
    .args(["build", "src", "--compiler", "./bin/fakec"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Build complete"));

  assert!(env.tmp_entries().is_empty());
}
