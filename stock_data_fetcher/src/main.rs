use anyhow::Result;
use clap::Parser;

use stock_data_fetcher::fetch_stock_data;
use stock_data_fetcher::io::dataframe::{bars_to_dataframe, frame_info};
use stock_data_fetcher::models::period::Period;

/// Fetch historical stock data from Yahoo Finance and print a summary.
///
/// With no arguments this fetches one month of AAPL and prints the first
/// five rows plus a structural summary of the frame.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Ticker symbol to fetch (e.g. "AAPL", "MSFT")
    #[arg(default_value = "AAPL")]
    symbol: String,

    /// History window: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd or max
    #[arg(long, default_value = "1mo")]
    period: Period,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let series = fetch_stock_data(&cli.symbol, cli.period).await?;
    let df = bars_to_dataframe(&series)?;

    println!("\n--- First 5 rows ---");
    println!("{}", df.head(Some(5)));

    println!("\n--- Data Info ---");
    print!("{}", frame_info(&df));

    Ok(())
}
