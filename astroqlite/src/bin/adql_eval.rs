use astroqlite::{gaia, preprocess_query, ExtensionConfig, FunctionRegistry, SqlValue};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "adql-eval")]
#[command(about = "Evaluate ADQL scalar functions outside of a database")]
struct Cli {
    /// JSON file with extension options (rng_seed, include_gaia, include_random)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for rand(), overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered functions
    List,
    /// Call one function
    Call {
        /// Function name (case-insensitive)
        name: String,
        /// Arguments: integers, floats, `null`, anything else is text
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// HEALPix pixel of a Gaia source_id
    Pixel {
        source_id: i64,
        /// HEALPix level, 0 to 12
        #[arg(long, default_value_t = 12)]
        level: i32,
    },
    /// source_id range covered by a HEALPix pixel
    PixelRange {
        /// HEALPix level, 0 to 12
        level: i32,
        pixel: i64,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Rewrite a Gaia archive query for a SQLite evaluator
    Preprocess {
        /// ADQL query text
        query: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Cannot read config {}", path.display()))?;
            ExtensionConfig::from_json(&text)?
        }
        None => ExtensionConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    match cli.command {
        Commands::List => {
            let registry = FunctionRegistry::with_config(&config)?;
            for function in registry.functions() {
                println!(
                    "{:<20} {} {}",
                    function.name(),
                    function.num_args(),
                    if function.is_deterministic() {
                        "deterministic"
                    } else {
                        "non-deterministic"
                    }
                );
            }
            println!("\nTotal functions: {}", registry.len());
        }
        Commands::Call { name, args, format } => {
            let registry = FunctionRegistry::with_config(&config)?;
            let values: Vec<SqlValue> = args.iter().map(|a| parse_arg(a)).collect();
            let result = registry.call(&name, &values)?;

            match format {
                OutputFormat::Table => println!("{}", result),
                OutputFormat::Json => print_json(&name, &values, &result)?,
            }
        }
        Commands::Pixel { source_id, level } => {
            let pixel = gaia::source_pixel(Some(level), source_id)
                .with_context(|| format!("Cannot locate source_id {}", source_id))?;
            println!("{}", pixel);
        }
        Commands::PixelRange {
            level,
            pixel,
            format,
        } => {
            let (lower, upper) = gaia::pixel_source_range(level, pixel)?;
            let total = gaia::pixel_count(level)?;
            match format {
                OutputFormat::Table => {
                    println!("Level:     {} ({} pixels)", level, total);
                    println!("Pixel:     {}", pixel);
                    println!("source_id: [{}, {})", lower, upper);
                }
                OutputFormat::Json => {
                    let range = JsonRange {
                        level,
                        pixel,
                        npix: total,
                        lower,
                        upper,
                    };
                    println!("{}", serde_json::to_string_pretty(&range)?);
                }
            }
        }
        Commands::Preprocess { query } => {
            println!("{}", preprocess_query(&query));
        }
    }

    Ok(())
}

fn parse_arg(s: &str) -> SqlValue {
    if s.eq_ignore_ascii_case("null") {
        SqlValue::Null
    } else if let Ok(i) = s.parse::<i64>() {
        SqlValue::Integer(i)
    } else if let Ok(f) = s.parse::<f64>() {
        SqlValue::Float(f)
    } else {
        SqlValue::Text(s.to_string())
    }
}

fn to_json(value: &SqlValue) -> serde_json::Value {
    match value {
        SqlValue::Null => serde_json::Value::Null,
        SqlValue::Integer(i) => serde_json::Value::from(*i),
        // NaN and infinities have no JSON form
        SqlValue::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        SqlValue::Text(_) | SqlValue::Blob(_) => serde_json::Value::String(value.to_string()),
    }
}

#[derive(serde::Serialize)]
struct JsonCall {
    name: String,
    args: Vec<serde_json::Value>,
    result: serde_json::Value,
}

#[derive(serde::Serialize)]
struct JsonRange {
    level: i32,
    pixel: i64,
    npix: i64,
    lower: i64,
    upper: i64,
}

fn print_json(name: &str, args: &[SqlValue], result: &SqlValue) -> anyhow::Result<()> {
    let call = JsonCall {
        name: name.to_ascii_lowercase(),
        args: args.iter().map(to_json).collect(),
        result: to_json(result),
    };
    println!("{}", serde_json::to_string_pretty(&call)?);
    Ok(())
}
