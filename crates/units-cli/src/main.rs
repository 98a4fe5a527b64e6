use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use converters::{handle_convert, ConvertRequest, Source};
use std::collections::BTreeMap;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;
use units_core::{classify, Category};

/// units – convert temperature, length and weight from the shell.
/// Commands:
///   - convert --value 10 --from c --to f   (or a JSON request on STDIN)
///   - classify --from in --to cm
///   - aliases
#[derive(Parser, Debug)]
#[command(name = "units", version, about = "Temperature, length and weight conversion")]
struct Cli {
    /// Print compact JSON instead of pretty-printed
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a value; without flags, reads {"value","unitFrom","unitTo"} from STDIN
    Convert {
        #[arg(long, allow_negative_numbers = true, requires_all = ["from", "to"])]
        value: Option<f64>,
        #[arg(long, requires_all = ["value", "to"])]
        from: Option<String>,
        #[arg(long, requires_all = ["value", "from"])]
        to: Option<String>,
    },

    /// Show which category a pair of units would be converted in
    Classify {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },

    /// List every accepted unit alias
    Aliases,
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    io::stdin().read_to_end(&mut buf).context("failed reading STDIN")?;
    Ok(buf)
}

fn print_json(value: &impl serde::Serialize, compact: bool) -> Result<()> {
    let out = if compact { serde_json::to_string(value)? } else { serde_json::to_string_pretty(value)? };
    println!("{out}");
    Ok(())
}

/// `{"Temperature": {"celsius": ["c", ...], ...}, ...}`
fn alias_table() -> BTreeMap<String, BTreeMap<&'static str, &'static [&'static str]>> {
    Category::ALL
        .into_iter()
        .map(|c| (c.to_string(), c.aliases().into_iter().collect()))
        .collect()
}

fn category_label(from: &str, to: &str) -> String {
    match classify(&from.to_lowercase(), &to.to_lowercase()) {
        Some(c) => c.to_string(),
        None => "unknown".to_owned(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Convert { value, from, to } => {
            let req = match (value, from, to) {
                (Some(v), Some(f), Some(t)) => ConvertRequest::new(v, &f, &t, Source::Cli)?,
                _ => ConvertRequest::parse_json(&read_stdin()?, Source::Cli)?,
            };
            tracing::debug!(?req, "converting");
            let resp = handle_convert(req)?;
            let body = resp.to_json()?;
            let value: serde_json::Value = serde_json::from_slice(&body)?;
            print_json(&value, cli.compact)?;
        }

        Commands::Classify { from, to } => println!("{}", category_label(&from, &to)),

        Commands::Aliases => print_json(&alias_table(), cli.compact)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn convert_flags_go_together() {
        let cli = Cli::try_parse_from(["units", "convert", "--value", "-40", "--from", "f", "--to", "c"]).unwrap();
        match cli.cmd {
            Commands::Convert { value, from, to } => {
                assert_eq!(value, Some(-40.0));
                assert_eq!(from.as_deref(), Some("f"));
                assert_eq!(to.as_deref(), Some("c"));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(Cli::try_parse_from(["units", "convert", "--value", "1"]).is_err());
        assert!(Cli::try_parse_from(["units", "convert"]).is_ok());
    }

    #[test]
    fn alias_table_json_shape() {
        let json = serde_json::to_value(alias_table()).unwrap();
        let categories: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(categories, ["Length", "Temperature", "Weight"]);
        assert_eq!(json["Temperature"]["kelvin"], serde_json::json!(["k", "kelvin", "kel"]));
        assert_eq!(json["Length"]["inch"], serde_json::json!(["in", "inch", "inches"]));
        assert_eq!(json["Length"].as_object().unwrap().len(), 8);
        assert_eq!(json["Weight"]["ounce"][0], "oz");
        assert_eq!(json["Weight"].as_object().unwrap().len(), 5);
    }

    #[test]
    fn classify_labels() {
        assert_eq!(category_label("Celsius", "F"), "Temperature");
        assert_eq!(category_label("in", "cm"), "Temperature");
        assert_eq!(category_label("gram", "zzz"), "Weight");
        assert_eq!(category_label("kg", "lb"), "unknown");
    }
}
