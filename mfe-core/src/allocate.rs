//! Port and identifier allocation for the remotes of a workspace.

use crate::error::ScaffoldError;
use crate::name::{identifier_base, is_valid_name};

/// Derived wiring data for one remote application.
///
/// Descriptors are pure values; every artifact that mentions the remote
/// (federation config, host page, env files) is rendered from the same
/// descriptor, which is what keeps ports and identifiers consistent
/// across files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDescriptor {
    pub name: String,
    pub port: u16,
    /// Name with its first letter capitalized, used as the prefix of
    /// generated component identifiers (`<base>Counter`, `<base>Card`).
    pub identifier_base: String,
}

impl RemoteDescriptor {
    /// URL of this remote's federation entry script.
    pub fn entry_url(&self) -> String {
        format!("http://localhost:{}/remoteEntry.js", self.port)
    }

    /// Base URL the remote's dev server listens on.
    pub fn base_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

/// Assign each remote a port and an identifier base, in input order.
///
/// Ports are sequential from `base_port`: the first remote gets
/// `base_port`, the second `base_port + 1`, and so on. Validation is
/// batched, so an error lists every offending name rather than the first
/// one found. Names that collide case-insensitively are rejected instead
/// of deduplicated, since directories, env vars, and identifiers derived
/// from them would all fold onto each other.
pub fn allocate(
    remote_names: &[String],
    base_port: u16,
) -> Result<Vec<RemoteDescriptor>, ScaffoldError> {
    let invalid: Vec<String> = remote_names
        .iter()
        .filter(|name| !is_valid_name(name))
        .cloned()
        .collect();
    if !invalid.is_empty() {
        return Err(ScaffoldError::InvalidNames(invalid));
    }

    let duplicates = find_case_insensitive_duplicates(remote_names);
    if !duplicates.is_empty() {
        return Err(ScaffoldError::DuplicateNames(duplicates));
    }

    if remote_names.len() > (u16::MAX - base_port) as usize + 1 {
        return Err(ScaffoldError::PortOverflow {
            base: base_port,
            count: remote_names.len(),
        });
    }

    Ok(remote_names
        .iter()
        .enumerate()
        .map(|(index, name)| RemoteDescriptor {
            name: name.clone(),
            port: base_port + index as u16,
            identifier_base: identifier_base(name),
        })
        .collect())
}

/// Every name involved in a case-insensitive collision, in input order.
pub(crate) fn find_case_insensitive_duplicates(names: &[String]) -> Vec<String> {
    let mut duplicates = Vec::new();
    for (i, name) in names.iter().enumerate() {
        let collides = names
            .iter()
            .enumerate()
            .any(|(j, other)| i != j && name.eq_ignore_ascii_case(other));
        if collides {
            duplicates.push(name.clone());
        }
    }
    duplicates
}
