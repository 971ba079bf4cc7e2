use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use cssfilter::assets::AssetLoader;
use cssfilter::models::{AppConfig, ColorReport, FilterReport};
use cssfilter::server::{self, ApiDoc};
use filter_solver::{FilterParams, Rgb, Solver};

#[derive(Parser)]
#[command(name = "cssfilter")]
#[command(about = "Compute CSS filter chains that recolor black elements to any color")]
struct Cli {
    /// Config file (overrides CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a filter chain for a color
    Solve {
        /// Target color: hex ("#FF5733", "F53") or "r,g,b"
        color: String,

        /// Print only the filter declaration
        #[arg(long, conflicts_with = "json")]
        raw: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Fixed seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Run wide-phase restarts in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Show the color a filter declaration renders from black
    Preview {
        /// Filter declaration, e.g. "invert(50%) sepia(100%)"
        filter: String,
    },
    /// Start the HTTP server
    Serve,
    /// Write the default config.yaml for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loader = match cli.config {
        Some(path) => AssetLoader::new(Some(path)),
        None => AssetLoader::from_env(),
    };

    match cli.command {
        Some(Commands::Solve {
            color,
            raw,
            json,
            seed,
            parallel,
        }) => run_solve_command(&loader, &color, raw, json, seed, parallel),
        Some(Commands::Preview { filter }) => run_preview_command(&filter),
        Some(Commands::Init { force }) => run_init_command(&loader, force),
        Some(Commands::Serve) => run_server(&loader).await,
        None => {
            run_status_command(&loader);
            Ok(())
        }
    }
}

/// Minimal logging for CLI commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cssfilter=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Solve a single color and print the result
fn run_solve_command(
    loader: &AssetLoader,
    color: &str,
    raw: bool,
    json: bool,
    seed: Option<u64>,
    parallel: bool,
) -> anyhow::Result<()> {
    init_cli_logging();

    // Reject bad input before loading anything else
    let target: Rgb = color
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("{color:?}: {e}"))?;

    let mut config = AppConfig::load_from_assets(loader).solver;
    if let Some(seed) = seed {
        config.seed = Some(seed);
    }
    if parallel {
        config.parallel_restarts = true;
    }

    let solution = Solver::new(config).solve(target);

    if raw {
        println!("{}", solution.filter);
    } else if json {
        let report = FilterReport::from(&solution);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let [r, g, b] = target.to_bytes();
        println!("Target:  {} (rgb {r}, {g}, {b})", target.to_hex());
        println!("Filter:  {}", solution.filter);
        println!("Loss:    {:.1} ({})", solution.loss, solution.quality);

        let rendered = solution.rendered();
        if rendered.to_bytes() != target.to_bytes() {
            println!("Renders: {}", rendered.to_hex());
        }
    }

    Ok(())
}

/// Apply a filter declaration to black and print the color
fn run_preview_command(filter: &str) -> anyhow::Result<()> {
    init_cli_logging();

    let params: FilterParams = filter
        .parse()
        .map_err(|e| anyhow::anyhow!("{filter:?}: {e}"))?;
    let report = ColorReport::from(params.preview());
    let [r, g, b] = report.rgb;

    println!("Filter: {params}");
    println!("Color:  {} (rgb {r}, {g}, {b})", report.hex);

    Ok(())
}

/// Extract the embedded config
fn run_init_command(loader: &AssetLoader, force: bool) -> anyhow::Result<()> {
    let report = loader.init(force)?;

    for f in &report.written {
        println!("  + {f}");
    }
    if !report.skipped.is_empty() {
        println!("Skipped existing files (use --force to overwrite):");
        for f in &report.skipped {
            println!("  - {f}");
        }
    }
    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command(loader: &AssetLoader) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let rust_log = std::env::var("RUST_LOG").ok();

    println!("cssfilter v{VERSION}");
    println!("CSS filter chains that recolor black elements to any color\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        rust_log.as_deref().unwrap_or("(not set)")
    );

    println!("\nConfig:  {}", loader.source());
    let config = AppConfig::load_from_assets(loader);
    let seed = config
        .solver
        .seed
        .map_or_else(|| "random".to_string(), |s| s.to_string());
    println!("  seed      = {seed}");
    println!("  restarts  = {}", config.solver.wide.restarts);
    println!("  parallel  = {}", config.solver.parallel_restarts);
    println!("  cache     = {}", config.server.cache_solutions);
    println!("  cache max = {}", config.server.cache_max_entries);

    println!("\nCommands:");
    println!("  cssfilter solve <COLOR>     Compute a filter chain");
    println!("  cssfilter preview <FILTER>  Render a filter declaration");
    println!("  cssfilter serve             Start the HTTP server");
    println!("  cssfilter init              Write the default config.yaml");
    println!("  cssfilter --help            Show all options");
}

async fn run_server(loader: &AssetLoader) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cssfilter=debug,filter_solver=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    tracing::info!(config = %loader.source(), "Config source");

    // Seed if the configured path is missing
    if let Err(e) = loader.seed_if_configured() {
        tracing::warn!(%e, "Failed to seed config");
    }

    let state = server::create_app_state(loader);

    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "cssfilter server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
