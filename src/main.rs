//! lambda-demo: groups `1..=N` into even/odd buckets and prints them.

use anyhow::Result;
use clap::Parser;
use lambda_utils::group;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lambda-demo", version, about = "Group integers by parity")]
struct Cli {
    /// Group the integers 1 through this value.
    #[arg(long, default_value_t = 5)]
    upto: u32,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .init();
}

fn parity(x: &u32) -> &'static str {
    if x % 2 == 0 {
        "even"
    } else {
        "odd"
    }
}

/// Groups `1..=upto` by parity and lays the buckets out one key per line,
/// members tab-indented below it. Keys and members are sorted so the output
/// is stable across runs.
fn render(upto: u32) -> String {
    let numbers: Vec<u32> = (1..=upto).collect();
    let buckets = group(&numbers, parity);
    info!(elements = numbers.len(), buckets = buckets.len(), "grouped");

    let mut keys: Vec<_> = buckets.keys().copied().collect();
    keys.sort_unstable();
    let mut out = String::new();
    for key in keys {
        out.push_str(key);
        out.push('\n');
        let mut members: Vec<_> = buckets[key].iter().copied().collect();
        members.sort_unstable();
        for m in members {
            out.push_str(&format!("\t{m}\n"));
        }
    }
    out
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli, "parsed arguments");

    print!("{}", render(cli.upto));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{render, Cli};
    use clap::Parser;

    #[test]
    fn renders_default_range_sorted_and_indented() {
        assert_eq!(render(5), "even\n\t2\n\t4\nodd\n\t1\n\t3\n\t5\n");
    }

    #[test]
    fn empty_range_renders_nothing() {
        assert_eq!(render(0), "");
    }

    #[test]
    fn single_element_has_only_odd_bucket() {
        assert_eq!(render(1), "odd\n\t1\n");
    }

    #[test]
    fn members_sort_numerically() {
        let out = render(12);
        assert!(out.starts_with("even\n\t2\n\t4\n\t6\n\t8\n\t10\n\t12\nodd\n"));
    }

    #[test]
    fn upto_defaults_to_five() {
        let cli = Cli::try_parse_from(["lambda-demo"]).unwrap();
        assert_eq!(cli.upto, 5);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from(["lambda-demo", "--upto", "9", "-vv"]).unwrap();
        assert_eq!(cli.upto, 9);
        assert_eq!(cli.verbose, 2);
    }
}
