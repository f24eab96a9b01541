use clap::{Parser, Subcommand};
use shorts_cli::commands;
use shorts_cli::logging;
use shorts_cli::readline;
use shorts_cli::CliContext;
use shorts_core::{AppConfig, AppConfigExt};
use std::io::Write;
use tracing::warn;

/// Startup flags
#[derive(Parser)]
#[command(version, about = "Interactive shorts trend dashboard")]
struct Args {
    /// Analysis service address; overrides the config file and SHORTS_API_BASE_URL
    #[arg(long)]
    api_base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Args::parse();
    let _log_guard = logging::init();

    let config = AppConfig::load()
        .unwrap_or_else(|err| {
            warn!(error = %err, "could not load config file, using defaults");
            AppConfig::default()
        })
        .with_env_overrides()
        .with_base_url_override(args.api_base_url);
    let ctx = CliContext::new(config).map_err(|e| e.to_string())?;

    println!("Shorts trend dashboard. Type `help` for commands.");
    if let Err(err) = commands::refresh(&ctx).await {
        print!("{err}");
    }

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(about = "shorts dashboard commands")]
struct Repl {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Toggle a category
    Category { name: String },
    /// Toggle a country (ISO code)
    Country { code: String },
    /// Set the period by key (e.g. 1week, all)
    Period { key: String },
    /// Show the selection and query state
    Status,
    /// List loaded videos, most viewed first
    Videos,
    /// Show analysis stats and panel previews
    Panels,
    /// Open the full list of a panel
    More { panel: usize },
    /// Open the channel drilldown for a video
    Channel { video: usize },
    /// Show the description of a drilldown row
    Describe { drilldown: u64, row: usize },
    /// List open overlays
    Overlays,
    /// Close an overlay (the top one by default)
    Close { id: Option<u64> },
    /// List categories, countries and periods
    Catalog,
    /// Show the active configuration
    Config,
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "shorts".to_string());
    let cli = Repl::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Category { name }) => commands::toggle_category(ctx, name).await?,
        Some(Commands::Country { code }) => commands::toggle_country(ctx, code).await?,
        Some(Commands::Period { key }) => commands::set_period(ctx, key).await?,
        Some(Commands::Status) => commands::show_status(ctx).await?,
        Some(Commands::Videos) => commands::list_videos(ctx).await?,
        Some(Commands::Panels) => commands::show_panels(ctx).await?,
        Some(Commands::More { panel }) => commands::show_more(ctx, *panel).await?,
        Some(Commands::Channel { video }) => commands::open_channel(ctx, *video).await?,
        Some(Commands::Describe { drilldown, row }) => {
            commands::describe(ctx, *drilldown, *row).await?
        }
        Some(Commands::Overlays) => commands::list_overlays(ctx).await?,
        Some(Commands::Close { id }) => commands::close_overlay(ctx, *id).await?,
        Some(Commands::Catalog) => commands::show_catalog()?,
        Some(Commands::Config) => commands::show_config(&ctx.config)?,
        Some(Commands::Exit) => {
            commands::exit()?;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
