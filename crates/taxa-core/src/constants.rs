/// Taxa system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Model artifact format version. Bumped on any incompatible artifact change.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Prior-map key that applies a bonus to every category under a context value.
pub const ALL_CATEGORIES_KEY: &str = "_all_cets";

/// Maximum number of matched keywords listed in an evidence rationale.
pub const MAX_RATIONALE_KEYWORDS: usize = 5;

/// Ellipsis marker appended to truncated evidence excerpts.
pub const ELLIPSIS: &str = "...";
