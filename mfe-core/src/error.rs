/// Errors raised while validating a scaffold request or materializing a
/// workspace plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldError {
    /// Names that violate the app naming pattern. Validation is batched,
    /// so every offender is listed, not just the first.
    InvalidNames(Vec<String>),
    /// Names that collide case-insensitively, either with each other or
    /// with the host name.
    DuplicateNames(Vec<String>),
    /// The requested app name was empty or whitespace.
    EmptyAppName,
    /// Sequential port assignment starting at `base` would run past the
    /// largest valid TCP port.
    PortOverflow { base: u16, count: usize },
    /// The external generator or a filesystem step failed for one app.
    Generation { app: String, reason: String },
}

impl std::fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaffoldError::InvalidNames(names) => write!(
                f,
                "Invalid name(s): {}. Names can only contain letters, numbers, and hyphens",
                names.join(", ")
            ),
            ScaffoldError::DuplicateNames(names) => write!(
                f,
                "Duplicate name(s): {}. Every app in a workspace needs a unique name",
                names.join(", ")
            ),
            ScaffoldError::EmptyAppName => write!(f, "App name must not be empty"),
            ScaffoldError::PortOverflow { base, count } => write!(
                f,
                "Cannot assign {count} sequential ports starting at {base}: the range runs past 65535"
            ),
            ScaffoldError::Generation { app, reason } => {
                write!(f, "Failed to generate app '{app}': {reason}")
            }
        }
    }
}

impl std::error::Error for ScaffoldError {}
