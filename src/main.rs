use std::env;
use std::fs;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ramtrack::models::book::PriceBook;
use ramtrack::models::record::PriceRecord;
use ramtrack::scrapers::Catalog;
use ramtrack::scrapers::document::DocumentParser;
use ramtrack::services::aggregation::{self, EmptyPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartKind {
    Overall,
    Module,
}

#[derive(Debug, Default)]
struct Args {
    path: String,
    module: i64,
    store: String,
    dimm_type: String,
    chart: Option<ChartKind>,
    null_empty: bool,
}

const USAGE: &str = "\
Usage: ramtrack --path <file> [--module <gb>] [--store <name>] [--type <name>]
                [--chart overall|module] [--null-empty]

Parses a RAM price document and prints per-date price summaries.

  --path <file>    price document to parse
  --module <gb>    only modules of this size; the report switches to price
                   per module
  --store <name>   only records from this store
  --type <name>    only records of this module type (desktop, laptop)
  --chart overall|module
                   print the chart table as JSON instead of a report;
                   `module` needs --type and --module
  --null-empty     chart tables mark empty groups as null instead of 0
";

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut args = Args::default();

    while let Some(flag) = raw.next() {
        match flag.as_str() {
            "--path" | "-p" => {
                args.path = raw.next().ok_or("--path needs a file argument")?;
            }
            "--module" | "-m" => {
                let value = raw.next().ok_or("--module needs a size in GB")?;
                args.module = value
                    .parse()
                    .map_err(|_| format!("--module: not an integer: {}", value))?;
            }
            "--store" | "-s" => {
                args.store = raw
                    .next()
                    .ok_or("--store needs a store name")?
                    .trim()
                    .to_lowercase();
            }
            "--type" | "-t" => {
                args.dimm_type = raw
                    .next()
                    .ok_or("--type needs a module type")?
                    .trim()
                    .to_lowercase();
            }
            "--chart" => {
                let value = raw.next().ok_or("--chart needs overall or module")?;
                args.chart = Some(match value.as_str() {
                    "overall" => ChartKind::Overall,
                    "module" => ChartKind::Module,
                    other => return Err(format!("--chart: unknown series: {}", other)),
                });
            }
            "--null-empty" => args.null_empty = true,
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    if args.path.is_empty() {
        return Err("--path is required".to_string());
    }
    if args.chart == Some(ChartKind::Module) && (args.dimm_type.is_empty() || args.module <= 0) {
        return Err("--chart module needs --type and --module".to_string());
    }
    Ok(args)
}

/// Per-date mean summary, filtered like the original report: dates with no
/// matching records are omitted entirely.
fn print_report(book: &PriceBook, args: &Args) {
    for date in book.dates() {
        let records: Vec<&PriceRecord> = book
            .records_on(date)
            .iter()
            .filter(|r| args.module <= 0 || r.size() == args.module)
            .filter(|r| args.store.is_empty() || r.store() == args.store)
            .filter(|r| args.dimm_type.is_empty() || r.dimm_type() == args.dimm_type)
            .collect();
        if records.is_empty() {
            continue;
        }

        if args.module > 0 {
            let prices: Vec<f64> = records.iter().map(|r| r.price_per_module()).collect();
            if let Some(value) = aggregation::mean(&prices) {
                println!("{}: Price/Module: ${}", date, value);
            }
        } else {
            let prices: Vec<f64> = records.iter().map(|r| r.price_per_gb()).collect();
            if let Some(value) = aggregation::mean(&prices) {
                println!("{}: Price/GB: ${}", date, value);
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}\n\n{}", message, USAGE);
            return Err(message.into());
        }
    };

    let text = fs::read_to_string(&args.path)?;
    let catalog = Catalog::default();
    let book = DocumentParser::new(catalog.clone()).parse(&text)?;
    tracing::info!(
        path = %args.path,
        dates = book.date_count(),
        records = book.record_count(),
        "parsed price document"
    );

    let policy = if args.null_empty {
        EmptyPolicy::Null
    } else {
        EmptyPolicy::Zero
    };

    match args.chart {
        Some(ChartKind::Overall) => {
            let table = aggregation::overall_series(&book, &catalog, policy);
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        Some(ChartKind::Module) => {
            let table = aggregation::module_series(&book, &args.dimm_type, args.module, policy);
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        None => print_report(&book, &args),
    }

    Ok(())
}
