use clap::{Parser, Subcommand};
use foodscan_core::Product;
use foodscan_off::{random_barcode, OffClient, KNOWN_BARCODES};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "foodscan")]
#[command(about = "Look up food products by barcode on Open Food Facts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up a single barcode and print the normalized product as JSON
    Lookup {
        barcode: String,
        /// Print single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Pick a random known barcode and look it up, as a scanner demo would
    Simulate {
        #[arg(long)]
        compact: bool,
    },
    /// List the barcodes used by `simulate`
    Barcodes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = foodscan_core::load_lookup_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Lookup { barcode, compact } => {
            let client = OffClient::from_config(&config)?;
            let product = client.fetch_product_by_barcode(&barcode).await;
            println!("{}", render(&product, compact)?);
        }
        Commands::Simulate { compact } => {
            let barcode = random_barcode();
            tracing::info!(barcode, "simulated scan");
            let client = OffClient::from_config(&config)?;
            let product = client.fetch_product_by_barcode(barcode).await;
            println!("{}", render(&product, compact)?);
        }
        Commands::Barcodes => {
            for barcode in KNOWN_BARCODES {
                println!("{barcode}");
            }
        }
    }

    Ok(())
}

fn render(product: &Product, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(product)
    } else {
        serde_json::to_string_pretty(product)
    }
}
