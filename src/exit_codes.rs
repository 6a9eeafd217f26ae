//! Exit codes returned by the `madlibs` and `story_linter` binaries.

/// Story rendered, template verified, or help printed.
pub const SUCCESS: i32 = 0;

/// Bad flag combination, e.g. `--verify-integrity` without a template.
pub const USAGE_ERROR: i32 = 1;

/// Template, stories directory, config file or terminal could not be used.
pub const IO_FAILURE: i32 = 2;

/// Template is malformed, fails validation, or cannot be rendered.
pub const TEMPLATE_FAILURE: i32 = 3;
