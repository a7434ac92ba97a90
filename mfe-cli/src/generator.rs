//! The one effect this tool cannot produce itself: the Next.js app
//! skeleton the federation files are layered onto.

use std::process::Command;

/// Produces a Next.js application skeleton at `apps/<name>`, relative to
/// the current directory.
///
/// The scaffolder only relies on the skeleton containing `package.json`
/// and `tsconfig.json` afterwards; everything else it writes itself.
pub trait AppGenerator {
    fn generate(&self, name: &str) -> Result<(), Box<dyn std::error::Error>>;
}

/// Production generator: shells out to `create-next-app` with the pinned
/// flag set, inheriting stdio so npm's own output stays visible.
pub struct CreateNextApp;

impl AppGenerator for CreateNextApp {
    fn generate(&self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
        let status = Command::new("npx")
            .arg("create-next-app@latest")
            .arg(name)
            .args([
                "--typescript",
                "--tailwind",
                "--eslint",
                "--app",
                "--src-dir",
                "--use-npm",
                "--no-git",
            ])
            .current_dir("apps")
            .status()?;

        if !status.success() {
            return Err(format!("create-next-app exited with {status}").into());
        }
        Ok(())
    }
}
