use colored::Colorize;
use dialoguer::{Input, Select};
use std::fs;
use std::path::{Path, PathBuf};

use mfe_core::error::ScaffoldError;
use mfe_core::manifest::ManifestEdit;
use mfe_core::name::parse_remotes;
use mfe_core::plan::{self, AppPlan, AppRole, WorkspacePlan};

use crate::generator::{AppGenerator, CreateNextApp};
use crate::report::{ConsoleReporter, Reporter};

/// Resolved options for one `mfe create` run.
pub struct CreateOptions {
    pub name: String,
    pub role: AppRole,
    pub port: u16,
    pub remotes: Vec<String>,
    pub remote_base_port: u16,
}

/// Raw CLI flags for `mfe create`, before resolution into [`CreateOptions`].
pub struct CliCreateOpts {
    pub port: Option<u16>,
    pub app_type: Option<String>,
    pub remotes: Option<String>,
    pub remote_base_port: Option<u16>,
    pub no_interactive: bool,
}

impl CliCreateOpts {
    fn has_any_flag(&self) -> bool {
        self.port.is_some()
            || self.app_type.is_some()
            || self.remotes.is_some()
            || self.remote_base_port.is_some()
    }
}

/// Create a micro-frontend application, plus its remotes for hosts.
///
/// Resolves options from `cli_opts`:
/// - `--no-interactive` or any explicit flag uses the provided values,
///   with defaults for the rest (type `remote`, port 3000, remotes from
///   3001).
/// - Otherwise, prompts interactively with `dialoguer`.
pub fn run(name: &str, cli_opts: CliCreateOpts) -> Result<(), Box<dyn std::error::Error>> {
    let opts = if cli_opts.no_interactive || cli_opts.has_any_flag() {
        resolve_flags(name, &cli_opts)?
    } else {
        prompt_options(name)?
    };

    let reporter = ConsoleReporter::new("Creating micro-frontend applications...");
    scaffold(&opts, &CreateNextApp, &reporter)
}

fn resolve_flags(
    name: &str,
    cli_opts: &CliCreateOpts,
) -> Result<CreateOptions, Box<dyn std::error::Error>> {
    let role = match cli_opts.app_type.as_deref() {
        None | Some("remote") => AppRole::Remote,
        Some("host") => AppRole::Host,
        Some(other) => {
            return Err(format!("Unknown app type '{other}'. Expected 'host' or 'remote'").into())
        }
    };

    Ok(CreateOptions {
        name: name.to_string(),
        role,
        port: cli_opts.port.unwrap_or(plan::DEFAULT_HOST_PORT),
        remotes: cli_opts
            .remotes
            .as_deref()
            .map(parse_remotes)
            .unwrap_or_default(),
        remote_base_port: cli_opts
            .remote_base_port
            .unwrap_or(plan::DEFAULT_REMOTE_BASE_PORT),
    })
}

fn prompt_options(name: &str) -> Result<CreateOptions, Box<dyn std::error::Error>> {
    println!(
        "{} Creating micro-frontend app: {}",
        "->".blue(),
        name.green()
    );
    println!();

    let role_choices = &["Remote (exposes components)", "Host (consumes remotes)"];
    let role_idx = Select::new()
        .with_prompt("App type")
        .items(role_choices)
        .default(0)
        .interact()?;
    let role = if role_idx == 1 {
        AppRole::Host
    } else {
        AppRole::Remote
    };

    let port: u16 = Input::new()
        .with_prompt("Port")
        .default(plan::DEFAULT_HOST_PORT)
        .interact_text()?;

    let remotes = if role == AppRole::Host {
        let raw: String = Input::new()
            .with_prompt("Remote names (comma-separated, empty for none)")
            .allow_empty(true)
            .interact_text()?;
        parse_remotes(&raw)
    } else {
        Vec::new()
    };

    Ok(CreateOptions {
        name: name.to_string(),
        role,
        port,
        remotes,
        remote_base_port: plan::DEFAULT_REMOTE_BASE_PORT,
    })
}

/// Run the full scaffold: build the plan, generate each application,
/// write its artifacts, and apply its manifest edits.
///
/// The `apps` directory is ensured up front; any failure after that
/// removes the whole directory before returning, so a broken run never
/// leaves a half-built workspace behind. A failed removal is reported
/// as a warning and does not replace the original error.
pub fn scaffold(
    opts: &CreateOptions,
    generator: &dyn AppGenerator,
    reporter: &dyn Reporter,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all("apps")?;

    match scaffold_apps(opts, generator, reporter) {
        Ok(()) => Ok(()),
        Err(e) => {
            reporter.fail("Error creating micro-frontend applications");
            if Path::new("apps").exists() {
                if let Err(cleanup) = fs::remove_dir_all("apps") {
                    reporter.warn(&format!("Could not remove the apps directory: {cleanup}"));
                }
            }
            Err(e)
        }
    }
}

fn scaffold_apps(
    opts: &CreateOptions,
    generator: &dyn AppGenerator,
    reporter: &dyn Reporter,
) -> Result<(), Box<dyn std::error::Error>> {
    match opts.role {
        AppRole::Host => {
            let request = plan::WorkspaceRequest {
                host_name: opts.name.clone(),
                remote_names: opts.remotes.clone(),
                host_port: opts.port,
                remote_base_port: opts.remote_base_port,
            };
            let workspace = plan::build(&request)?;

            if !opts.remotes.is_empty() {
                reporter.info(&format!(
                    "Creating host app with remotes: {}",
                    opts.remotes.join(", ")
                ));
            }

            for app in workspace.apps() {
                materialize(app, generator, reporter)?;
            }

            reporter.succeed("Successfully created all applications");
            print_next_steps(&workspace);
        }
        AppRole::Remote => {
            if !opts.remotes.is_empty() {
                reporter.warn(
                    "--remotes is ignored for remote apps; remotes expose components rather than consume them",
                );
            }
            let app = plan::build_remote(&opts.name, opts.port)?;
            materialize(&app, generator, reporter)?;
            reporter.succeed(&format!("Successfully created remote app '{}'", app.name));
            print_remote_next_steps(&app);
        }
    }
    Ok(())
}

fn materialize(
    app: &AppPlan,
    generator: &dyn AppGenerator,
    reporter: &dyn Reporter,
) -> Result<(), Box<dyn std::error::Error>> {
    reporter.update(&format!("Creating {} app: {}", app.role, app.name));

    write_app(app, generator).map_err(|e| ScaffoldError::Generation {
        app: app.name.clone(),
        reason: e.to_string(),
    })?;
    Ok(())
}

fn write_app(app: &AppPlan, generator: &dyn AppGenerator) -> Result<(), Box<dyn std::error::Error>> {
    generator.generate(&app.name)?;

    let root = PathBuf::from(app.root());
    for (rel_path, content) in &app.artifacts {
        let path = root.join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
    }

    for edit in &app.edits {
        apply_edit(&root, edit)?;
    }

    Ok(())
}

fn apply_edit(root: &Path, edit: &ManifestEdit) -> Result<(), Box<dyn std::error::Error>> {
    let path = root.join(edit.path());
    let raw = fs::read_to_string(&path)?;
    let mut manifest: serde_json::Value = serde_json::from_str(&raw)?;
    edit.apply(&mut manifest);
    fs::write(&path, format!("{}\n", serde_json::to_string_pretty(&manifest)?))?;
    Ok(())
}

fn print_next_steps(workspace: &WorkspacePlan) {
    println!();
    println!("To get started:");
    println!();
    println!("1. Install dependencies for all apps:");
    for app in workspace.apps() {
        println!();
        println!("  cd {}", app.root());
        println!("  npm install --legacy-peer-deps");
        println!("  cd ../..");
    }
    println!();

    if workspace.remotes.is_empty() {
        println!("2. Start the host app:");
        println!();
        println!("  cd {}", workspace.host.root());
        println!("  npm run dev  # runs on port {}", workspace.host.port);
    } else {
        println!("2. Start the remote apps first:");
        for remote in &workspace.remotes {
            println!();
            println!("  cd {}", remote.root());
            println!("  npm run dev  # runs on port {}", remote.port);
        }
        println!();
        println!("3. Then start the host app:");
        println!();
        println!("  cd {}", workspace.host.root());
        println!("  npm run dev  # runs on port {}", workspace.host.port);
    }
    println!();
}

fn print_remote_next_steps(app: &AppPlan) {
    println!();
    println!("To get started:");
    println!();
    println!("  cd {}", app.root());
    println!("  npm install --legacy-peer-deps");
    println!("  npm run dev  # runs on port {}", app.port);
    println!();
}
