//! News sentiment multifactor pipeline.
//!
//! Loads the three headline exports, scores and aggregates sentiment,
//! fetches reference-index bars over the sentiment date range, builds the
//! merged feature table, fits the return regression and writes the two
//! output artifacts.
//!
//! Usage: `cargo run --bin pipeline --features cli`

use sentifactor::{market, model, news, primitives::Symbol, report};

/// Headline exports, read from the working directory in this order.
const HEADLINE_FILES: [&str; 3] =
    ["cnbc_headlines.csv", "guardian_headlines.csv", "reuters_headlines.csv"];

/// Reference index proxy.
const REFERENCE_SYMBOL: &str = "SPY";

/// Scatter plot output path.
const PLOT_FILE: &str = "sentiment_vs_return.png";

/// Merged feature table output path.
const TABLE_FILE: &str = "merged_sentiment_spy_data.csv";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let symbol = Symbol::from(REFERENCE_SYMBOL);

    // Load and normalize the headline datasets
    let mut frames = Vec::with_capacity(HEADLINE_FILES.len());
    for path in HEADLINE_FILES {
        let records = news::load_headlines(path)?;
        println!("{path}: {} headlines after normalization", records.len());
        frames.push(news::headline_frame(&records)?);
    }

    // Score every headline and aggregate to one mean value per date
    let combined = news::concat_sources(frames)?;
    let scorer = news::VaderScorer::new();
    let scored = news::score_headlines(&combined, &scorer)?;
    let daily = news::daily_mean_sentiment(&scored)?;

    let (start, end) = news::sentiment_date_range(&daily)?;
    println!("\nDaily sentiment: {} dates from {start} to {end}", daily.height());

    // Fetch reference bars over the sentiment range and derive returns
    let bars = market::fetch_daily_bars(&symbol, start, end).await?;
    println!("{symbol}: {} daily bars fetched", bars.len());

    let market_df = market::with_daily_return(market::bars_frame(&bars, &symbol)?, &symbol)?;

    // Merge and derive the engineered features
    let features = model::build_feature_table(
        market_df,
        daily,
        &symbol,
        &model::FeatureConfig::default(),
    )?;
    println!("\nMerged feature table ({} rows):", features.height());
    println!("{}", features.head(Some(5)));

    // Fit the regression and print the summary
    let regression = model::fit_sentiment_model(&features)?;
    println!("{regression}");

    // Write the scatter plot and the merged table
    let sentiment = column_values(&features, model::SENTIMENT_COL)?;
    let returns = column_values(&features, model::TARGET_COL)?;

    let plot = report::ScatterPlot::new(
        format!("News Sentiment vs {REFERENCE_SYMBOL} Daily Return"),
        "Daily Sentiment",
        format!("{REFERENCE_SYMBOL} Daily Return"),
    );
    plot.save(&sentiment, &returns, PLOT_FILE)?;
    report::write_feature_csv(&features, TABLE_FILE)?;

    println!("Wrote {PLOT_FILE} and {TABLE_FILE}");

    Ok(())
}

fn column_values(
    df: &polars::prelude::DataFrame,
    name: &str,
) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    Ok(df.column(name)?.f64()?.into_no_null_iter().collect())
}
