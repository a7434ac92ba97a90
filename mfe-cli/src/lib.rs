//! # mfe-cli
//!
//! Command-line tool for scaffolding Next.js micro-frontend workspaces
//! wired together with module federation.
//!
//! This crate provides the `mfe` binary with the following commands:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `mfe init` | Initialize a turbo-driven npm workspace (`apps/`, `packages/`) |
//! | `mfe create <name>` | Create a host app plus its remotes, or a standalone remote |
//!
//! ## Architecture
//!
//! The CLI is organized into command modules under [`commands`]:
//!
//! - [`commands::init`] — workspace initialization (`mfe init`)
//! - [`commands::create`] — application scaffolding (`mfe create`)
//!
//! All planning (names, ports, artifact contents) happens in `mfe-core`;
//! this crate resolves options, runs the generator, and writes files.
//! The two effects worth faking in tests sit behind traits:
//!
//! - [`generator`] — produces the Next.js app skeleton (`create-next-app`)
//! - [`report`] — progress display (spinner plus colored status lines)

pub mod commands;
pub mod generator;
pub mod report;
