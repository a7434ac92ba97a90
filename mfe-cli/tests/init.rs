use mfe_cli::commands::init;
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    fn new(path: &Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(path).unwrap();
        CwdGuard { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

// ── Workspace initialization ────────────────────────────────────────

#[test]
#[serial]
fn init_creates_the_workspace_layout() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());

    init::run().unwrap();

    assert!(Path::new("apps").is_dir());
    assert!(Path::new("packages").is_dir());

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string("package.json").unwrap()).unwrap();
    assert_eq!(manifest["name"], "nextjs-mfe-workspace");
    assert_eq!(manifest["private"], true);
    assert_eq!(manifest["workspaces"], serde_json::json!(["apps/*", "packages/*"]));
    assert_eq!(manifest["scripts"]["dev"], "turbo run dev");
    assert_eq!(manifest["devDependencies"]["turbo"], "^1.10.0");
}

#[test]
#[serial]
fn init_pretty_prints_the_manifest() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());

    init::run().unwrap();

    let raw = fs::read_to_string("package.json").unwrap();
    assert!(raw.contains("  \"name\": \"nextjs-mfe-workspace\""));
    assert!(raw.ends_with('\n'));
}

#[test]
#[serial]
fn init_refuses_an_existing_package_json() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());

    fs::write("package.json", "{\"name\":\"mine\"}").unwrap();
    let err = init::run().unwrap_err();

    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read_to_string("package.json").unwrap(), "{\"name\":\"mine\"}");
}
