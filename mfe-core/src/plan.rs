//! Builds the full artifact plan for a workspace before anything touches
//! disk. All cross-file consistency (ports, names, identifiers) is decided
//! here, once, and every artifact is rendered from that single decision.

use std::collections::BTreeMap;

use crate::allocate::{allocate, RemoteDescriptor};
use crate::error::ScaffoldError;
use crate::manifest::ManifestEdit;
use crate::name::{identifier_base, is_valid_name};
use crate::templates;

/// Default dev-server port for a host application.
pub const DEFAULT_HOST_PORT: u16 = 3000;
/// Default port for the first remote; later remotes count up from here.
pub const DEFAULT_REMOTE_BASE_PORT: u16 = 3001;

/// Relative file path (forward slashes) to file content, for one app.
/// A `BTreeMap` keeps iteration order deterministic.
pub type ArtifactSet = BTreeMap<String, String>;

/// Whether an application consumes remote components or exposes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRole {
    Host,
    Remote,
}

impl AppRole {
    pub fn as_str(self) -> &'static str {
        match self {
            AppRole::Host => "host",
            AppRole::Remote => "remote",
        }
    }
}

impl std::fmt::Display for AppRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the orchestrator must materialize for one application:
/// files to write and manifest edits to apply, all relative to the app
/// root under `apps/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPlan {
    pub name: String,
    pub role: AppRole,
    pub port: u16,
    pub artifacts: ArtifactSet,
    pub edits: Vec<ManifestEdit>,
}

impl AppPlan {
    /// Application root, relative to the workspace root.
    pub fn root(&self) -> String {
        format!("apps/{}", self.name)
    }
}

/// The cross-referenced plans for a host and every remote it wires in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspacePlan {
    pub host: AppPlan,
    pub remotes: Vec<AppPlan>,
}

impl WorkspacePlan {
    /// All plans in creation order: host first, then remotes in request
    /// order.
    pub fn apps(&self) -> impl Iterator<Item = &AppPlan> {
        std::iter::once(&self.host).chain(self.remotes.iter())
    }

    /// Number of applications covered by this plan.
    pub fn app_count(&self) -> usize {
        1 + self.remotes.len()
    }
}

/// Input for building a host-centered workspace plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRequest {
    pub host_name: String,
    pub remote_names: Vec<String>,
    pub host_port: u16,
    pub remote_base_port: u16,
}

impl WorkspaceRequest {
    /// A request with the default ports: host on 3000, remotes from 3001.
    pub fn new(host_name: impl Into<String>, remote_names: Vec<String>) -> Self {
        WorkspaceRequest {
            host_name: host_name.into(),
            remote_names,
            host_port: DEFAULT_HOST_PORT,
            remote_base_port: DEFAULT_REMOTE_BASE_PORT,
        }
    }
}

/// Build the artifact plan for a host and every remote it references.
///
/// Pure: no I/O, and the same request always yields the same plan.
/// Validation runs before anything is rendered, batched so errors carry
/// every offending name. A blank host name is [`ScaffoldError::EmptyAppName`];
/// names violating the pattern are [`ScaffoldError::InvalidNames`];
/// case-insensitive collisions among remotes or between a remote and the
/// host are [`ScaffoldError::DuplicateNames`].
pub fn build(request: &WorkspaceRequest) -> Result<WorkspacePlan, ScaffoldError> {
    if request.host_name.trim().is_empty() {
        return Err(ScaffoldError::EmptyAppName);
    }

    let mut invalid: Vec<String> = Vec::new();
    if !is_valid_name(&request.host_name) {
        invalid.push(request.host_name.clone());
    }
    invalid.extend(
        request
            .remote_names
            .iter()
            .filter(|name| !is_valid_name(name))
            .cloned(),
    );
    if !invalid.is_empty() {
        return Err(ScaffoldError::InvalidNames(invalid));
    }

    let descriptors = allocate(&request.remote_names, request.remote_base_port)?;

    let shadowing: Vec<String> = request
        .remote_names
        .iter()
        .filter(|name| name.eq_ignore_ascii_case(&request.host_name))
        .cloned()
        .collect();
    if !shadowing.is_empty() {
        return Err(ScaffoldError::DuplicateNames(shadowing));
    }

    let host = host_plan(&request.host_name, request.host_port, &descriptors);
    let remotes = descriptors.iter().map(remote_plan).collect();

    Ok(WorkspacePlan { host, remotes })
}

/// Build the plan for one standalone remote application.
///
/// Remotes expose components rather than consume them, so this path takes
/// no remote list at all.
pub fn build_remote(name: &str, port: u16) -> Result<AppPlan, ScaffoldError> {
    if name.trim().is_empty() {
        return Err(ScaffoldError::EmptyAppName);
    }
    if !is_valid_name(name) {
        return Err(ScaffoldError::InvalidNames(vec![name.to_string()]));
    }

    let descriptor = RemoteDescriptor {
        name: name.to_string(),
        port,
        identifier_base: identifier_base(name),
    };
    Ok(remote_plan(&descriptor))
}

fn host_plan(name: &str, port: u16, remotes: &[RemoteDescriptor]) -> AppPlan {
    let mut artifacts = ArtifactSet::new();
    artifacts.insert(
        "module-federation.config.js".to_string(),
        templates::host::federation_config(name, remotes),
    );
    artifacts.insert(
        "next.config.js".to_string(),
        templates::next_config().to_string(),
    );
    artifacts.insert(
        "src/app/page.tsx".to_string(),
        templates::host::page(name, remotes),
    );
    artifacts.insert(
        "src/types/remote-modules.d.ts".to_string(),
        templates::host::remote_type_decls(remotes),
    );
    artifacts.insert(".env.local".to_string(), templates::host::env_local(remotes));
    artifacts.insert(
        "src/bootstrap.js".to_string(),
        templates::host::bootstrap(remotes),
    );
    artifacts.insert(
        "src/app/init-remote.js".to_string(),
        templates::host::init_remote().to_string(),
    );
    artifacts.insert(
        "src/app/layout.tsx".to_string(),
        templates::host::layout().to_string(),
    );
    artifacts.insert("public/remoteEntry.js".to_string(), String::new());
    artifacts.insert(
        "next-env.d.ts".to_string(),
        templates::host::next_env().to_string(),
    );
    artifacts.insert(".env".to_string(), templates::env_port(port));

    AppPlan {
        name: name.to_string(),
        role: AppRole::Host,
        port,
        artifacts,
        edits: vec![
            ManifestEdit::PackageManifest {
                name: name.to_string(),
            },
            ManifestEdit::TsconfigInclude,
        ],
    }
}

fn remote_plan(descriptor: &RemoteDescriptor) -> AppPlan {
    let name = &descriptor.name;
    let mut artifacts = ArtifactSet::new();
    artifacts.insert(
        "module-federation.config.js".to_string(),
        templates::remote::federation_config(name),
    );
    artifacts.insert(
        "next.config.js".to_string(),
        templates::next_config().to_string(),
    );
    artifacts.insert(
        "src/components/exposed/Counter.tsx".to_string(),
        templates::remote::counter(name),
    );
    artifacts.insert(
        "src/components/exposed/Card.tsx".to_string(),
        templates::remote::card(name),
    );
    artifacts.insert(".env".to_string(), templates::env_port(descriptor.port));

    AppPlan {
        name: name.clone(),
        role: AppRole::Remote,
        port: descriptor.port,
        artifacts,
        edits: vec![ManifestEdit::PackageManifest { name: name.clone() }],
    }
}
