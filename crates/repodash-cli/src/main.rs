use clap::Parser;
use repodash_core::{
    credentials::{Credentials, TOKEN_ENV, USERNAME_ENV},
    providers::GitHubProvider,
    Config, Dashboard, RepoSource,
};
use repodash_tui::{
    run_tui,
    view::{format_last_updated, format_size_kb},
    App,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "repodash")]
#[command(version, about = "Your GitHub repositories, in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: <config dir>/repodash/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// GitHub personal access token
    #[arg(long, env = TOKEN_ENV, hide_env_values = true, global = true)]
    token: Option<String>,

    /// Account whose repositories are listed
    #[arg(long, env = USERNAME_ENV, global = true)]
    username: Option<String>,

    /// GitHub API base URL (for GitHub Enterprise)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Write logs here. The dashboard logs to a temp file by default so the
    /// terminal stays clean.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive dashboard (the default)
    Dashboard,
    /// Print repositories and exit
    List {
        /// Only show repositories whose name contains this (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Dashboard);

    let log_file = match (&cli.log_file, &command) {
        (Some(path), _) => Some(path.clone()),
        (None, Commands::Dashboard) => Some(std::env::temp_dir().join("repodash.log")),
        (None, _) => None,
    };
    init_logging(log_file.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(api_url) = cli.api_url {
        config.github.api_url = api_url;
    }

    let credentials = Credentials::resolve_layered(cli.token, cli.username, &config.github);
    let account = credentials
        .as_ref()
        .map(|c| c.username().to_string())
        .unwrap_or_default();

    let source: Arc<dyn RepoSource> = Arc::new(GitHubProvider::new(&config.github)?);
    let mut dashboard = Dashboard::start(source, credentials);

    match command {
        Commands::Dashboard => {
            tracing::info!("Opening dashboard for: {}", account);
            run_tui(App::new(dashboard, account)).await?;
        }
        Commands::List { search, json } => {
            tracing::info!("Listing repositories matching: {:?}", search);
            dashboard.wait_loaded().await;
            dashboard.set_search_term(search);
            print_repos(&dashboard, json)?;
            dashboard.teardown();
        }
    }

    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "repodash=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(std::sync::Mutex::new(file)),
                )
                .init();
        }
        None => {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}

fn print_repos(dashboard: &Dashboard, json: bool) -> anyhow::Result<()> {
    let repos = dashboard.filtered();

    if json {
        println!("{}", serde_json::to_string_pretty(&repos)?);
        return Ok(());
    }

    for repo in &repos {
        println!(
            "{:<40} {:<8} {:<14} {:>10}  {}",
            repo.title,
            repo.repo_type,
            repo.language,
            format_size_kb(repo.size),
            format_last_updated(repo.last_updated),
        );
    }
    println!("{} repositories", dashboard.repo_count());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_flags_parse() {
        let cli = Cli::try_parse_from(["repodash", "list", "--search", "al", "--json"]).unwrap();
        match cli.command {
            Some(Commands::List { search, json }) => {
                assert_eq!(search, "al");
                assert!(json);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_no_subcommand_means_dashboard() {
        let cli = Cli::try_parse_from(["repodash", "--api-url", "http://localhost:1"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:1"));
    }
}
