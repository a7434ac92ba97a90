mod commands;
mod generator;
mod report;

use clap::{Parser, Subcommand};
use commands::{create, init};

#[derive(Parser)]
#[command(name = "mfe", version, about = "MFE CLI — scaffold Next.js micro-frontend workspaces")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a micro-frontend workspace in the current directory
    Init,
    /// Create a host app with its remotes, or a standalone remote app
    Create {
        /// App name
        name: String,
        /// Port for this app
        #[arg(short, long)]
        port: Option<u16>,
        /// App type: host or remote
        #[arg(short = 't', long = "type")]
        app_type: Option<String>,
        /// Comma-separated remote names (host apps only)
        #[arg(short, long)]
        remotes: Option<String>,
        /// Port for the first remote; later remotes count up from it
        #[arg(long)]
        remote_base_port: Option<u16>,
        /// Never prompt; use defaults for anything not given
        #[arg(long)]
        no_interactive: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => init::run(),
        Commands::Create {
            name,
            port,
            app_type,
            remotes,
            remote_base_port,
            no_interactive,
        } => create::run(
            &name,
            create::CliCreateOpts {
                port,
                app_type,
                remotes,
                remote_base_port,
                no_interactive,
            },
        ),
    };

    if let Err(e) = result {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(1);
    }
}
