//! Plant CLI - storefront and admin screens of the plant shop on the terminal.
//!
//! Commands:
//! - `plant products` - List, show, add, edit and delete products
//! - `plant cart` - Add the shown product to the cart, show the cart
//! - `plant login` / `plant logout` - Manage the customer session
//! - `plant config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod store;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, ConfigArgs, LoginArgs, ProductsArgs};

/// Plant CLI - browse and manage the plant shop
#[derive(Parser)]
#[command(name = "plant")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and manage products
    Products(ProductsArgs),

    /// Manage the shopping cart
    Cart(CartArgs),

    /// Sign in as a customer
    Login(LoginArgs),

    /// Sign out
    Logout,

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let mut log = ctx.config.log.clone();
    if cli.verbose {
        log.level = log.level.more_verbose(2);
    }
    if let Err(e) = plant_observability::init_logging(&log) {
        ctx.output.warn(&format!("Logging disabled: {e}"));
    }

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Login(args) => commands::session::login(args, &ctx).await,
        Commands::Logout => commands::session::logout(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
