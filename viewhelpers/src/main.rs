//! # viewhelpers
//!
//! Command-line front end for viewhelperslib.
//!
//! ## Overview
//!
//! Exposes every presentation helper to shell scripts and static-site
//! pipelines. Each subcommand prints the rendered string, or with
//! `--output json` the structured result behind it.
//!
//! ## Usage
//!
//! ```bash
//! # Relative or calendar date
//! viewhelpers date 2024-01-05 --now 2024-06-15T12:00:00Z
//!
//! # Thousands separators
//! viewhelpers commify 79593255.66
//!
//! # Identifier to path-like token
//! viewhelpers snakeify Admin::UserAccount
//!
//! # Escape for a JavaScript string literal (stdin when no argument)
//! echo "it's </script>" | viewhelpers js-string
//!
//! # Striped list items
//! viewhelpers list Home About Contact
//! viewhelpers list Home About --output json
//!
//! # Table
//! viewhelpers table --header Name,Qty --row apples,3 --row pears,5 --attr class=data
//! ```
//!
//! Logging goes to stderr. Set `VIEWHELPERS_LOG` (e.g. `debug`) or pass
//! `--verbose`.

mod render;

use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use viewhelperslib::{
    commify, convert_to_list_items, generate_table, js_string, parse_instant, render_list_items,
    snakeify, urlify, Attributes, DateFormatOptions, DateFormatter, FixedClock, Html,
    ListOptions,
};

use render::{render, OutputMode, Rendered};

/// Environment variable holding the log filter
const LOG_ENV: &str = "VIEWHELPERS_LOG";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("viewhelpers")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Presentation helpers for templates: dates, numbers, identifiers, lists, tables")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .global(true)
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug information to stderr"),
        )
        .subcommand(
            Command::new("date")
                .about("Format a date as words within a week, otherwise as a calendar date")
                .arg(
                    Arg::new("instant")
                        .required(true)
                        .help("RFC 3339 timestamp, 'YYYY-MM-DD HH:MM:SS' or 'YYYY-MM-DD' (UTC)"),
                )
                .arg(
                    Arg::new("now")
                        .long("now")
                        .help("Reference time instead of the system clock"),
                )
                .arg(
                    Arg::new("short-format")
                        .long("short-format")
                        .help("strftime format for dates within the current year"),
                )
                .arg(
                    Arg::new("long-format")
                        .long("long-format")
                        .help("strftime format for dates from other years"),
                ),
        )
        .subcommand(
            Command::new("commify")
                .about("Insert thousands separators into a numeral")
                .arg(
                    Arg::new("numeral")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("Decimal numeral, e.g. -1234.56"),
                ),
        )
        .subcommand(
            Command::new("snakeify")
                .about("Convert a namespaced identifier to a lowercase path-like token")
                .arg(
                    Arg::new("identifier")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("e.g. Foo::BarBaz"),
                ),
        )
        .subcommand(
            Command::new("js-string")
                .about("Escape text for a JavaScript string literal")
                .arg(
                    Arg::new("text")
                        .allow_hyphen_values(true)
                        .help("Text to escape (reads stdin when omitted)"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("Render list items with first/last/odd/even classes")
                .arg(
                    Arg::new("items")
                        .num_args(0..)
                        .action(ArgAction::Append)
                        .help("Rendered item fragments"),
                )
                .arg(
                    Arg::new("no-stripe")
                        .long("no-stripe")
                        .action(ArgAction::SetTrue)
                        .help("Leave out odd/even classes"),
                ),
        )
        .subcommand(
            Command::new("table")
                .about("Render a table from rows of cells")
                .arg(
                    Arg::new("header")
                        .long("header")
                        .action(ArgAction::Append)
                        .value_delimiter(',')
                        .help("Comma-separated header labels (may repeat)"),
                )
                .arg(
                    Arg::new("row")
                        .short('r')
                        .long("row")
                        .action(ArgAction::Append)
                        .value_delimiter(',')
                        .help("Comma-separated cells of one row (repeat per row)"),
                )
                .arg(
                    Arg::new("attr")
                        .short('a')
                        .long("attr")
                        .action(ArgAction::Append)
                        .help("Attribute for the table element, as key=value"),
                ),
        )
        .subcommand(
            Command::new("url")
                .about("Prefix http:// to an address that lacks a scheme")
                .arg(
                    Arg::new("addr")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("Address"),
                ),
        )
}

/// Install the stderr subscriber. `VIEWHELPERS_LOG` overrides `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Handler for date command
fn date_handler(matches: &ArgMatches) -> anyhow::Result<Rendered> {
    let input = required(matches, "instant")?;
    let date = parse_instant(input)?;

    let mut options = DateFormatOptions::new();
    if let Some(format) = matches.get_one::<String>("short-format") {
        options = options.short_format(format)?;
    }
    if let Some(format) = matches.get_one::<String>("long-format") {
        options = options.long_format(format)?;
    }

    let formatted = match matches.get_one::<String>("now") {
        Some(now) => {
            let now = parse_instant(now).context("invalid --now")?;
            DateFormatter::new()
                .with_clock(FixedClock(now.with_timezone(&Utc)))
                .format(Some(&date), &options)
        }
        None => DateFormatter::new().format(Some(&date), &options),
    };

    Ok(Rendered::text(formatted.unwrap_or_default()))
}

/// Handler for list command
fn list_handler(matches: &ArgMatches) -> anyhow::Result<Rendered> {
    let items: Vec<String> = matches
        .get_many::<String>("items")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    let options = ListOptions::new().with_stripe(!matches.get_flag("no-stripe"));

    let text = render_list_items(&items, &options, &Html);
    let data = convert_to_list_items(&items, &options);
    Ok(Rendered::with_data(text, &data)?)
}

/// Handler for table command
fn table_handler(matches: &ArgMatches) -> anyhow::Result<Rendered> {
    let headers: Option<Vec<String>> = matches
        .get_many::<String>("header")
        .map(|v| v.cloned().collect());
    let rows: Vec<Vec<String>> = matches
        .get_occurrences::<String>("row")
        .map(|rows| rows.map(|cells| cells.cloned().collect()).collect())
        .unwrap_or_default();
    let attrs = extract_attributes(matches)?;

    debug!(rows = rows.len(), headers = headers.is_some(), "building table");
    let table = generate_table(Some(&rows[..]), headers.as_deref(), attrs);
    let text = table
        .as_ref()
        .map(|t| t.render(&Html))
        .unwrap_or_default();
    Ok(Rendered::with_data(text, &table)?)
}

/// Parse every `--attr key=value`, later keys overriding earlier ones
fn extract_attributes(matches: &ArgMatches) -> anyhow::Result<Attributes> {
    let mut attrs = Attributes::new();
    for raw in matches.get_many::<String>("attr").into_iter().flatten() {
        let parsed: Attributes = raw.parse()?;
        for (key, value) in parsed.iter() {
            attrs.set(key, value);
        }
    }
    Ok(attrs)
}

/// Text argument, or stdin when absent
fn text_or_stdin(matches: &ArgMatches, name: &str) -> anyhow::Result<String> {
    if let Some(text) = matches.get_one::<String>(name) {
        return Ok(text.clone());
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf.strip_suffix('\n').unwrap_or(&buf).to_string())
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> anyhow::Result<&'a str> {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .ok_or_else(|| anyhow::anyhow!("missing argument: {}", name))
}

/// Dispatch the selected subcommand
fn run(matches: &ArgMatches) -> anyhow::Result<Rendered> {
    match matches.subcommand() {
        Some(("date", sub)) => date_handler(sub),
        Some(("commify", sub)) => Ok(Rendered::text(commify(required(sub, "numeral")?))),
        Some(("snakeify", sub)) => Ok(Rendered::text(snakeify(required(sub, "identifier")?))),
        Some(("js-string", sub)) => Ok(Rendered::text(js_string(&text_or_stdin(sub, "text")?))),
        Some(("list", sub)) => list_handler(sub),
        Some(("table", sub)) => table_handler(sub),
        Some(("url", sub)) => Ok(Rendered::text(urlify(required(sub, "addr")?))),
        Some((other, _)) => Err(anyhow::anyhow!("unknown command: {}", other)),
        None => Err(anyhow::anyhow!("no command given")),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let output_mode = matches
        .get_one::<String>("output")
        .and_then(|s| s.parse::<OutputMode>().ok())
        .unwrap_or_default();

    let result = run(&matches).and_then(|rendered| Ok(render(&rendered, output_mode)?));
    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").for_stderr().red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
