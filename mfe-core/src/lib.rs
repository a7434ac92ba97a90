pub mod allocate;
pub mod error;
pub mod manifest;
pub mod name;
pub mod plan;
pub mod templates;

pub use allocate::{allocate, RemoteDescriptor};
pub use error::ScaffoldError;
pub use manifest::{workspace_manifest, ManifestEdit};
pub use name::{identifier_base, is_valid_name, parse_remotes};
pub use plan::{
    build, build_remote, AppPlan, AppRole, ArtifactSet, WorkspacePlan, WorkspaceRequest,
    DEFAULT_HOST_PORT, DEFAULT_REMOTE_BASE_PORT,
};
