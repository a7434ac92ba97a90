//! Command implementations for the `mfe` CLI.
//!
//! Each submodule corresponds to a top-level CLI command.

/// Application scaffolding — `mfe create <name>`.
///
/// Builds the workspace plan (names, ports, artifact contents) via
/// `mfe-core`, runs `create-next-app` per application, then layers the
/// federation files and manifest edits on top. Any failure removes the
/// `apps` directory entirely.
pub mod create;

/// Workspace initialization — `mfe init`.
///
/// Creates `apps/` and `packages/` and writes the root turbo workspace
/// `package.json`.
pub mod init;
