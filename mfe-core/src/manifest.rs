//! Typed edits against JSON manifests the external generator produced.
//!
//! Each edit is a pure transform over a parsed `serde_json::Value`; the
//! orchestrator owns the read-modify-write around it.

use serde_json::{json, Map, Value};

/// Dependency pins merged into every generated app's `package.json`.
/// Federation needs these exact framework versions to line up across the
/// whole workspace.
pub const APP_DEPENDENCIES: &[(&str, &str)] = &[
    ("next", "13.5.6"),
    ("react", "18.2.0"),
    ("react-dom", "18.2.0"),
    ("@module-federation/nextjs-mf", "7.0.8"),
    ("@module-federation/utilities", "3.0.5"),
    ("webpack", "5.89.0"),
    ("geist", "^1.2.0"),
];

/// Glob appended to a host's `tsconfig.json` include list so the ambient
/// remote-module declarations are picked up.
pub const TYPES_INCLUDE_GLOB: &str = "src/types/**/*.d.ts";

/// A JSON edit the plan schedules against a file the generator created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestEdit {
    /// Pin the federation dependency set, set the package name, and point
    /// `scripts.dev` at `next dev`. Applied to every app.
    PackageManifest { name: String },
    /// Register the ambient type declarations with the TypeScript config.
    /// Host only.
    TsconfigInclude,
}

impl ManifestEdit {
    /// Path of the edited file, relative to the application root.
    pub fn path(&self) -> &'static str {
        match self {
            ManifestEdit::PackageManifest { .. } => "package.json",
            ManifestEdit::TsconfigInclude => "tsconfig.json",
        }
    }

    /// Apply this edit to the parsed manifest in place.
    pub fn apply(&self, manifest: &mut Value) {
        match self {
            ManifestEdit::PackageManifest { name } => pin_app_manifest(name, manifest),
            ManifestEdit::TsconfigInclude => include_ambient_types(manifest),
        }
    }
}

/// Merge the dependency pins into `package.json`, set `name`, and set
/// `scripts.dev`. Keys the generator wrote and we do not own are kept.
pub fn pin_app_manifest(name: &str, manifest: &mut Value) {
    let root = ensure_object(manifest);
    root.insert("name".to_string(), json!(name));

    let dependencies = ensure_object(root.entry("dependencies").or_insert_with(|| json!({})));
    for (dependency, version) in APP_DEPENDENCIES {
        dependencies.insert((*dependency).to_string(), json!(version));
    }

    let scripts = ensure_object(root.entry("scripts").or_insert_with(|| json!({})));
    scripts.insert("dev".to_string(), json!("next dev"));
}

/// Append [`TYPES_INCLUDE_GLOB`] to tsconfig's `include`, creating the
/// array if the generator omitted it. Guarded so reapplying the edit
/// cannot stack duplicates.
pub fn include_ambient_types(manifest: &mut Value) {
    let root = ensure_object(manifest);
    let include = root.entry("include").or_insert_with(|| json!([]));
    if !include.is_array() {
        *include = json!([]);
    }
    let entries = match include {
        Value::Array(entries) => entries,
        _ => unreachable!(),
    };
    if !entries.iter().any(|v| v.as_str() == Some(TYPES_INCLUDE_GLOB)) {
        entries.push(json!(TYPES_INCLUDE_GLOB));
    }
}

/// Root `package.json` written by `init`: a turbo-driven npm workspace
/// spanning `apps/*` and `packages/*`.
pub fn workspace_manifest() -> Value {
    json!({
        "name": "nextjs-mfe-workspace",
        "private": true,
        "workspaces": ["apps/*", "packages/*"],
        "scripts": {
            "dev": "turbo run dev",
            "build": "turbo run build",
            "start": "turbo run start",
            "lint": "turbo run lint"
        },
        "devDependencies": {
            "turbo": "^1.10.0"
        }
    })
}

fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = json!({});
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}
