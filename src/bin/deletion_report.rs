use std::env;

use anyhow::{Context, bail};
use deletion_stats::{DEFAULT_LOG_FILTER, DeletionConfig, DeletionStats, chunk_count_for};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    stats: DeletionStats,
    freed_size_formatted: String,
}

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Report(ReportOptions),
}

#[derive(Debug, PartialEq)]
struct ReportOptions {
    total_count: u64,
    total_size_bytes: i64,
    chunks: Option<u32>,
    chunk_size: Option<usize>,
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let options = match parse_args(&args)? {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Report(options) => options,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let chunk_count = resolve_chunk_count(&options, DeletionConfig::from_env)?;
    debug!(
        "Reporting total_count={}, total_size_bytes={}, chunk_count={}",
        options.total_count, options.total_size_bytes, chunk_count
    );

    let stats =
        DeletionStats::with_chunks(options.total_count, options.total_size_bytes, chunk_count);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&build_report(stats))?);
    } else {
        println!("{}", stats);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut positional: Vec<&str> = Vec::new();
    let mut chunks: Option<u32> = None;
    let mut chunk_size: Option<usize> = None;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--chunks" | "-c" => {
                let value = args.get(i + 1).context("--chunks needs a value")?;
                chunks = Some(value.parse().with_context(|| format!("invalid --chunks: {}", value))?);
                i += 1;
            }
            "--chunk-size" | "-s" => {
                let value = args.get(i + 1).context("--chunk-size needs a value")?;
                chunk_size = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid --chunk-size: {}", value))?,
                );
                i += 1;
            }
            "--json" => json = true,
            "--help" | "-h" => return Ok(Command::Help),
            flag if flag.starts_with("--") => bail!("unknown option: {}", flag),
            // Negative sizes such as -100 land here.
            other => positional.push(other),
        }
        i += 1;
    }

    if positional.len() != 2 {
        bail!("expected <total_count> <total_size_bytes>, see --help");
    }

    let total_count: u64 = positional[0]
        .parse()
        .with_context(|| format!("invalid total_count: {}", positional[0]))?;
    let total_size_bytes: i64 = positional[1]
        .parse()
        .with_context(|| format!("invalid total_size_bytes: {}", positional[1]))?;

    Ok(Command::Report(ReportOptions {
        total_count,
        total_size_bytes,
        chunks,
        chunk_size,
        json,
    }))
}

/// An explicit `--chunks` wins; the config is only consulted when neither
/// `--chunks` nor `--chunk-size` was given.
fn resolve_chunk_count<F>(options: &ReportOptions, load_config: F) -> anyhow::Result<u32>
where
    F: FnOnce() -> deletion_stats::Result<DeletionConfig>,
{
    if let Some(chunks) = options.chunks {
        return Ok(chunks);
    }

    let chunk_size = match options.chunk_size {
        Some(size) => size,
        None => load_config()?.chunk_size,
    };
    Ok(chunk_count_for(options.total_count, chunk_size)?)
}

fn build_report(stats: DeletionStats) -> Report {
    Report {
        stats,
        freed_size_formatted: stats.freed_size_formatted(),
    }
}

fn print_help() {
    println!("deletion-report - summarize a finished batch deletion");
    println!();
    println!("Usage: deletion-report <total_count> <total_size_bytes> [options]");
    println!();
    println!("Options:");
    println!("  -c, --chunks <N>       Number of chunks used (default: derived from chunk size)");
    println!("  -s, --chunk-size <N>   Items per chunk (env: DELETION_STATS_CHUNK_SIZE, default: 100)");
    println!("      --json             Print the report as JSON");
    println!("  -h, --help             Show this help");
}

#[cfg(test)]
mod tests {
    use super::*;
    use deletion_stats::StatsError;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("deletion-report")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    fn options(list: &[&str]) -> ReportOptions {
        match parse_args(&args(list)).unwrap() {
            Command::Report(options) => options,
            Command::Help => panic!("unexpected help for {:?}", list),
        }
    }

    fn broken_config() -> deletion_stats::Result<DeletionConfig> {
        Err(StatsError::Validation("chunk_size must be greater than zero".to_string()))
    }

    #[test]
    fn test_parse_positional_and_flags() {
        let parsed = options(&["250", "1536", "--chunk-size", "100", "--json"]);
        assert_eq!(
            parsed,
            ReportOptions {
                total_count: 250,
                total_size_bytes: 1536,
                chunks: None,
                chunk_size: Some(100),
                json: true,
            }
        );
    }

    #[test]
    fn test_negative_size_is_positional() {
        let parsed = options(&["10", "-100"]);
        assert_eq!(parsed.total_size_bytes, -100);

        let stats = DeletionStats::new(parsed.total_count, parsed.total_size_bytes);
        assert_eq!(stats.to_string(), "10 items deleted, ~0 B freed in 1 chunk");
    }

    #[test]
    fn test_help_wins_over_other_args() {
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), Command::Help);
        assert_eq!(parse_args(&args(&["5", "-h"])).unwrap(), Command::Help);
    }

    #[test]
    fn test_bad_arguments_rejected() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["5"])).is_err());
        assert!(parse_args(&args(&["five", "1024"])).is_err());
        assert!(parse_args(&args(&["5", "1KB"])).is_err());
        assert!(parse_args(&args(&["5", "1024", "--chunks"])).is_err());
        assert!(parse_args(&args(&["5", "1024", "--chunks", "x"])).is_err());
        assert!(parse_args(&args(&["5", "1024", "--verbose"])).is_err());
    }

    #[test]
    fn test_explicit_chunks_skip_config() {
        let parsed = options(&["5", "1024", "--chunks", "3"]);
        assert_eq!(resolve_chunk_count(&parsed, broken_config).unwrap(), 3);
    }

    #[test]
    fn test_chunk_size_flag_skips_config() {
        let parsed = options(&["250", "1536", "--chunk-size", "100"]);
        assert_eq!(resolve_chunk_count(&parsed, broken_config).unwrap(), 3);
    }

    #[test]
    fn test_chunk_count_from_config() {
        let parsed = options(&["250", "1536"]);
        let count = resolve_chunk_count(&parsed, || Ok(DeletionConfig::new(50))).unwrap();
        assert_eq!(count, 5);
    }

    #[test]
    fn test_config_error_surfaces_when_needed() {
        let parsed = options(&["250", "1536"]);
        assert!(resolve_chunk_count(&parsed, broken_config).is_err());
    }

    #[test]
    fn test_zero_chunk_size_flag_rejected() {
        let parsed = options(&["250", "1536", "--chunk-size", "0"]);
        assert!(resolve_chunk_count(&parsed, || Ok(DeletionConfig::default())).is_err());
    }

    #[test]
    fn test_json_report_fields() {
        let report = build_report(DeletionStats::with_chunks(250, 1536, 3));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_count"], 250);
        assert_eq!(json["total_size_bytes"], 1536);
        assert_eq!(json["chunk_count"], 3);
        assert_eq!(json["freed_size_formatted"], "~2 KB");
    }
}
