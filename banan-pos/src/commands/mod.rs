//! CLI command definitions and dispatch.

pub mod backoffice;
pub mod order;
pub mod pay;
pub mod session;
pub mod table;

use anyhow::{Context as _, bail};
use banan_pos::banan_client::{NetworkHttpClient, RestaurantApi};
use banan_pos::routes::{Route, resolve};
use banan_pos::{BackOffice, PosConfig, TableController};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Bàn Ăn: restaurant tables, orders and payments
#[derive(Debug, Parser)]
#[command(name = "banan", version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL, API prefix included
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Bearer token from `banan login`
    #[arg(long, global = true, hide_env_values = true, env = "BANAN_TOKEN")]
    pub token: Option<String>,

    /// tracing filter directive, e.g. `debug`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in and print the session token
    Login(session::LoginArgs),
    /// List tables
    Tables(table::TablesArgs),
    /// Table counts by status
    Stats,
    /// Show one table with its dishes
    Show(table::ShowArgs),
    /// List the menu
    Menu(table::MenuArgs),
    /// Add dishes to a table (`dish[:qty[:note]]`)
    Order(order::OrderArgs),
    /// Send every uncalled dish of a table to the kitchen
    Call(order::TableArg),
    /// Advance the status of one order item
    Toggle(order::ItemArgs),
    /// Set the quantity of one order item
    Quantity(order::QuantityArgs),
    /// Remove one order item
    Remove(order::ItemArgs),
    /// Request or settle payment for a table
    Pay(pay::PayArgs),
    /// List invoices
    Invoices(backoffice::InvoicesArgs),
    /// Revenue reports
    Revenue(backoffice::RevenueArgs),
    /// Customer reviews
    Reviews(backoffice::ReviewsArgs),
    /// Table bookings
    Bookings(backoffice::BookingsArgs),
}

impl Cli {
    /// Flags win over environment values
    pub fn apply_overrides(&self, mut config: PosConfig) -> PosConfig {
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if let Some(token) = &self.token {
            config.token = Some(token.clone());
        }
        if let Some(level) = &self.log_level {
            config.log_level = Some(level.clone());
        }
        config
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: PosConfig) -> anyhow::Result<()> {
        config.validate()?;
        let ctx = Context::new(config, self.format)?;

        match &self.command {
            Commands::Login(args) => session::login(&ctx, args).await,
            Commands::Tables(args) => table::list(&ctx, args).await,
            Commands::Stats => table::stats(&ctx).await,
            Commands::Show(args) => table::show(&ctx, args).await,
            Commands::Menu(args) => table::menu(&ctx, args).await,
            Commands::Order(args) => order::order(&ctx, args).await,
            Commands::Call(args) => order::call(&ctx, args).await,
            Commands::Toggle(args) => order::toggle(&ctx, args).await,
            Commands::Quantity(args) => order::quantity(&ctx, args).await,
            Commands::Remove(args) => order::remove(&ctx, args).await,
            Commands::Pay(args) => pay::execute(&ctx, args).await,
            Commands::Invoices(args) => backoffice::invoices(&ctx, args).await,
            Commands::Revenue(args) => backoffice::revenue(&ctx, args).await,
            Commands::Reviews(args) => backoffice::reviews(&ctx, args).await,
            Commands::Bookings(args) => backoffice::bookings(&ctx, args).await,
        }
    }
}

/// Everything a command needs
pub struct Context {
    pub config: PosConfig,
    pub api: RestaurantApi<NetworkHttpClient>,
    pub format: OutputFormat,
}

impl Context {
    fn new(config: PosConfig, format: OutputFormat) -> anyhow::Result<Self> {
        let http = config
            .client_config()
            .build_http_client()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            config,
            api: RestaurantApi::new(http),
            format,
        })
    }

    pub fn controller(&self) -> TableController<NetworkHttpClient> {
        TableController::new(self.api.clone(), self.config.controller.clone())
    }

    pub fn backoffice(&self) -> BackOffice<NetworkHttpClient> {
        BackOffice::new(self.api.clone())
    }

    /// Refuse pages the stored token's role may not see
    pub async fn ensure_access(&self, route: Route) -> anyhow::Result<()> {
        let session = self.api.session().snapshot().await;
        if !session.is_authenticated() {
            bail!("Vui lòng đăng nhập trước (banan login, rồi đặt BANAN_TOKEN).");
        }
        let role = session.role();
        if resolve(route, role.as_deref()) == Route::NotFound {
            bail!(
                "Vai trò {} không có quyền truy cập {}",
                role.as_deref().unwrap_or("(không rõ)"),
                route.path()
            );
        }
        Ok(())
    }
}

/// Controller with tables loaded and `key` (id or name) selected
pub async fn open_table(
    ctx: &Context,
    key: &str,
) -> anyhow::Result<TableController<NetworkHttpClient>> {
    ctx.ensure_access(Route::Tables).await?;
    let mut controller = ctx.controller();
    controller.load_tables().await?;
    let table_id = controller
        .find_table(key)
        .map(|t| t.id.clone())
        .with_context(|| format!("Không tìm thấy bàn {}", key))?;
    controller.select_table(&table_id).await?;
    Ok(controller)
}
