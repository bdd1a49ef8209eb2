pub const APP_NAME: &str = "tmpbuild";

/// Compiler looked up on PATH when none is configured.
pub const DEFAULT_COMPILER: &str = "go";

/// Extension of the source files that must be present before building.
pub const DEFAULT_EXTENSION: &str = "go";

pub const DEFAULT_BUILD_ID: &str = "myproj";

/// Leading component of the reserved temp file name: `<prefix>.<build-id>.<random>`.
pub const DEFAULT_TEMP_PREFIX: &str = APP_NAME;

/// Variable injected into the child environment to mark a nested run.
pub const MARKER_VAR: &str = "MODE";
pub const MARKER_VALUE: &str = "test";

/// Line printed by a nested run before it exits.
pub const MARKER_BANNER: &str = "TEST";

pub const ENV_COMPILER: &str = "TMPBUILD_COMPILER";
pub const ENV_BUILD_ID: &str = "TMPBUILD_BUILD_ID";
pub const ENV_TMPDIR: &str = "TMPBUILD_TMPDIR";
