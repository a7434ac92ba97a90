use colored::Colorize;
use std::fs;
use std::path::Path;

/// Initialize a micro-frontend workspace in the current directory.
///
/// Creates `apps/` and `packages/` and writes the root `package.json`
/// declaring the turbo-driven npm workspace. Refuses to run in a
/// directory that already has a `package.json`.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    if Path::new("package.json").exists() {
        return Err("package.json already exists in this directory".into());
    }

    println!("{} Initializing micro-frontend workspace", "->".blue());

    fs::create_dir_all("apps")?;
    fs::create_dir_all("packages")?;

    let manifest = mfe_core::manifest::workspace_manifest();
    fs::write(
        "package.json",
        format!("{}\n", serde_json::to_string_pretty(&manifest)?),
    )?;

    println!("{} Workspace initialized!", "✓".green());
    println!();
    println!("Next steps:");
    println!("  1. {}", "npm install".cyan());
    println!(
        "  2. {}",
        "mfe create <host> --type host --remotes <remote1>,<remote2>".cyan()
    );
    println!();

    Ok(())
}
