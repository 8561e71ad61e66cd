//! BookMS auth CLI
//!
//! Inspect route access and sidebar visibility for demo accounts, and manage
//! the persisted session.

use anyhow::{Context, Result};
use bookms_auth::routing::forbidden_back_path;
use bookms_auth::utils::logging::init_logging;
use bookms_auth::{AuthSystem, Config, Navigation, RouteAccess, Sidebar, build_info};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "bookms")]
#[command(about = "Role-based access control for the BookMS dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path; environment variables are used when omitted
    #[arg(short, long, global = true, env = "BOOKMS_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table with its requirements
    Routes,

    /// Sign in, then evaluate a navigation
    Check {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        /// Path to navigate to
        #[arg(long, default_value = "/dashboard")]
        path: String,
    },

    /// Sign in, then print the visible sidebar
    Sidebar {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        /// Path used to mark the active entry
        #[arg(long, default_value = "/dashboard")]
        current: String,
    },

    /// Report the identity restored from the configured session store
    Restore,

    /// Clear the configured session store
    Logout,

    /// Show build information
    Version,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => {
            dotenvy::dotenv().ok();
            Config::from_env().context("loading configuration from environment")?
        }
    };
    Ok(config)
}

fn print_version() {
    let info = build_info();
    println!("bookms {}", info.version);
    println!("commit:  {}", info.git_hash);
    println!("built:   {}", info.build_time);
    println!("rustc:   {}", info.rust_version);
}

async fn run(cli: Cli) -> Result<()> {
    // Version must work without a usable configuration
    if let Commands::Version = cli.command {
        print_version();
        return Ok(());
    }

    let config = load_config(cli.config.as_ref()).await?;
    init_logging(config.logging())?;

    match cli.command {
        Commands::Version => print_version(),

        Commands::Routes => {
            let auth = AuthSystem::from_config(&config).await?;
            for route in auth.router().table().routes() {
                let access = match &route.access {
                    RouteAccess::Public => "public".to_string(),
                    RouteAccess::SignIn => "public (sign-in)".to_string(),
                    RouteAccess::Protected(requirement) => requirement.to_string(),
                };
                match &route.redirect {
                    Some(target) => println!("{:<20} {:<24} -> {}", route.path, access, target),
                    None => println!("{:<20} {:<24} {}", route.path, access, route.title),
                }
            }
        }

        Commands::Check {
            email,
            password,
            path,
        } => {
            let auth = AuthSystem::from_config(&config).await?;
            let identity = auth.login(&email, &password).await?;
            let navigation = auth.navigate(&path);

            println!("{} ({})", identity.email, identity.role);
            println!("{}", serde_json::to_string_pretty(&navigation)?);
            if let Navigation::Denied(_) = navigation {
                println!("back: {}", forbidden_back_path(Some(&identity)));
            }
        }

        Commands::Sidebar {
            email,
            password,
            current,
        } => {
            let auth = AuthSystem::from_config(&config).await?;
            let identity = auth.login(&email, &password).await?;
            let sidebar = Sidebar::dashboard();

            println!("{} [{}]", identity.full_name, identity.role.badge_class());
            for section in auth.visible_sidebar(&sidebar, &current) {
                println!("{}", section.label);
                for entry in section.items {
                    let marker = if entry.active { ">" } else { " " };
                    let lock = if entry.item.is_locked() { " (locked)" } else { "" };
                    println!(" {} {:<12} {}{}", marker, entry.item.title, entry.item.url, lock);
                }
            }
        }

        Commands::Restore => {
            let auth = AuthSystem::from_config(&config).await?;
            match auth.current_identity() {
                Some(identity) => println!("{}", serde_json::to_string_pretty(&identity)?),
                None => println!("no session"),
            }
        }

        Commands::Logout => {
            let auth = AuthSystem::from_config(&config).await?;
            auth.logout().await;
            println!("session cleared");
        }
    }

    Ok(())
}
