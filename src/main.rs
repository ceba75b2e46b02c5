//! Binance Futures CLI - main entry point.

use anyhow::Result;
use binance_futures_cli::config::{Config, Environment};
use binance_futures_cli::exchange::BinanceFuturesClient;
use binance_futures_cli::order::{validate_order, OrderExecutor, OrderRequest, OrderResult};
use chrono::DateTime;
use clap::{Parser, Subcommand};
use tracing::{error, info, warn, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Binance Futures CLI
#[derive(Parser)]
#[command(name = "binance-futures-cli")]
#[command(version, about = "Order placement CLI for Binance USDT-M Futures Testnet")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place a MARKET or LIMIT order
    PlaceOrder {
        /// Trading pair symbol (e.g. BTCUSDT, ETHUSDT)
        #[arg(long)]
        symbol: String,

        /// Order side: BUY or SELL
        #[arg(long)]
        side: String,

        /// Order type: MARKET or LIMIT
        #[arg(long = "type")]
        order_type: String,

        /// Order quantity (positive number)
        #[arg(long)]
        quantity: String,

        /// Order price (required for LIMIT orders)
        #[arg(long)]
        price: Option<String>,
    },

    /// Check exchange connectivity and credential validity
    HealthCheck,

    /// Show account balance and unrealized PnL
    AccountInfo,

    /// Look up a previously placed order
    OrderStatus {
        /// Trading pair symbol the order was placed on
        #[arg(long)]
        symbol: String,

        /// Exchange-assigned order id
        #[arg(long)]
        order_id: i64,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let guard = match init_logging() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("failed to initialize logging: {e:#}");
            std::process::exit(1);
        }
    };

    let code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            error!("{e:#}");
            eprintln!("\n❌ {e:#}\n");
            1
        }
    };

    // Dropping the guard flushes buffered log records on every exit path.
    drop(guard);
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match config.environment {
        Environment::Production => {
            warn!("🚨 PRODUCTION MODE ENABLED - REAL TRADES WILL BE EXECUTED 🚨");
        }
        Environment::Testnet => {
            info!("✓ Using testnet endpoint (safe to test)");
        }
    }

    let client = BinanceFuturesClient::new(&config.binance)?;

    match cli.command {
        Commands::PlaceOrder {
            symbol,
            side,
            order_type,
            quantity,
            price,
        } => {
            place_order(
                &client,
                &symbol,
                &side,
                &order_type,
                &quantity,
                price.as_deref(),
            )
            .await
        }
        Commands::HealthCheck => health_check(&client, config.environment).await,
        Commands::AccountInfo => account_info(&client, config.environment).await,
        Commands::OrderStatus { symbol, order_id } => {
            order_status(&client, &symbol, order_id).await
        }
    }
}

async fn place_order(
    client: &BinanceFuturesClient,
    symbol: &str,
    side: &str,
    order_type: &str,
    quantity: &str,
    price: Option<&str>,
) -> Result<()> {
    // Validation happens before any network traffic.
    let request = validate_order(symbol, side, order_type, quantity, price)
        .map_err(|e| anyhow::anyhow!("validation error: {e}"))?;

    print_order_summary(&request);

    let result = OrderExecutor::new(client).execute(&request).await?;

    if result.accepted {
        print_order_confirmation(&result);
        Ok(())
    } else {
        anyhow::bail!(
            "order rejected: {}",
            result.error.as_deref().unwrap_or("unknown error")
        )
    }
}

async fn health_check(client: &BinanceFuturesClient, environment: Environment) -> Result<()> {
    info!(
        "running health check against {} environment",
        environment.as_str()
    );

    if client.health_check().await {
        println!("\n✓ Health check passed ({})\n", environment.as_str());
        Ok(())
    } else {
        anyhow::bail!("health check failed: see log for details")
    }
}

async fn account_info(client: &BinanceFuturesClient, environment: Environment) -> Result<()> {
    let account = client.get_account().await?;

    println!();
    println!("{}", "═".repeat(60));
    println!("Account Information ({})", environment.as_str());
    println!("{}", "═".repeat(60));
    println!("Total Wallet Balance:    {} USDT", account.total_wallet_balance);
    println!("Available Balance:       {} USDT", account.available_balance);
    println!("Total Margin Balance:    {} USDT", account.total_margin_balance);
    println!("Unrealized Profit/Loss:  {} USDT", account.total_unrealized_profit);
    println!("{}", "═".repeat(60));
    println!();

    Ok(())
}

async fn order_status(
    client: &BinanceFuturesClient,
    symbol: &str,
    order_id: i64,
) -> Result<()> {
    let order = client.get_order(symbol, order_id).await?;

    println!();
    println!("{}", "═".repeat(60));
    println!("Order {} on {}", order.order_id, order.symbol);
    println!("{}", "═".repeat(60));
    println!("Status:            {:?}", order.status);
    println!("Side:              {:?}", order.side);
    println!("Type:              {:?}", order.order_type);
    println!("Original Quantity: {}", order.orig_qty);
    println!("Executed Quantity: {}", order.executed_qty);
    println!("Price:             {}", order.price);
    if let Some(updated) = DateTime::from_timestamp_millis(order.update_time) {
        println!("Updated:           {}", updated.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    println!("{}", "═".repeat(60));
    println!();

    Ok(())
}

fn print_order_summary(request: &OrderRequest) {
    println!();
    println!("{}", "═".repeat(60));
    println!("ORDER SUMMARY");
    println!("{}", "═".repeat(60));
    println!("Symbol:    {}", request.symbol);
    println!("Side:      {}", format!("{:?}", request.side).to_uppercase());
    println!(
        "Type:      {}",
        format!("{:?}", request.order_type()).to_uppercase()
    );
    println!("Quantity:  {}", request.quantity);
    match request.price() {
        Some(price) => println!("Price:     {}", price),
        None => println!("Price:     Market Price"),
    }
    println!("{}", "═".repeat(60));
}

fn print_order_confirmation(result: &OrderResult) {
    println!();
    println!("{}", "═".repeat(60));
    println!("✓ Order placed successfully");
    println!("{}", "═".repeat(60));
    if let Some(response) = &result.response {
        println!("Order ID:          {}", response.order_id);
        println!("Status:            {:?}", response.status);
        println!(
            "Executed Quantity: {} {}",
            response.executed_qty, response.symbol
        );
        if let Some(updated) = DateTime::from_timestamp_millis(response.update_time) {
            println!("Updated:           {}", updated.format("%Y-%m-%d %H:%M:%S UTC"));
        }
    }
    println!("{}", "═".repeat(60));
    println!();
}

/// Initialize logging with a rolling file sink mirrored to stdout.
fn init_logging() -> Result<WorkerGuard> {
    use tracing_subscriber::fmt::writer::MakeWriterExt;

    std::fs::create_dir_all("logs")?;

    let file_appender = tracing_appender::rolling::daily("logs", "futures-cli.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("binance_futures_cli=debug".parse()?)
                .add_directive(Level::INFO.into()),
        )
        .with_writer(std::io::stdout.and(file_writer))
        .with_target(true)
        .with_ansi(true)
        .init();

    Ok(guard)
}
