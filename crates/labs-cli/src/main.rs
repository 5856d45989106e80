//! Collection labs CLI
//!
//! Runs each lab walkthrough and console exercise as a subcommand.

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use labs_exercises::{cart, deli, demo, letters};
use log::debug;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process;

fn cli() -> Command {
    Command::new("labs")
        .version("0.1.0")
        .about("Collection labs: generic holder, map, set and queue walkthroughs plus exercises")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug details to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("generics").about("Store and retrieve values in a generic holder"),
        )
        .subcommand(Command::new("map").about("Add, overwrite and remove map entries"))
        .subcommand(Command::new("sets").about("Add, check and remove set items"))
        .subcommand(Command::new("queue").about("Enqueue, dequeue and peek a queue"))
        .subcommand(
            Command::new("letters")
                .about("Count how often each character appears")
                .arg(
                    Arg::new("text")
                        .value_name("TEXT")
                        .help("Text to analyse [default: \"hello world\"]")
                        .index(1),
                )
                .arg(
                    Arg::new("file")
                        .short('f')
                        .long("file")
                        .value_name("FILE")
                        .help("Read the text from a file")
                        .conflicts_with("text"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the counts as a JSON object")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("deli")
                .about("Hand out delicatessen tickets to a line of customers")
                .arg(
                    Arg::new("customers")
                        .short('n')
                        .long("customers")
                        .value_name("N")
                        .help("Number of customers in line")
                        .value_parser(value_parser!(usize))
                        .default_value("12"),
                )
                .arg(
                    Arg::new("start")
                        .short('s')
                        .long("start")
                        .value_name("N")
                        .help("First ticket number")
                        .value_parser(value_parser!(u32))
                        .default_value("1"),
                ),
        )
        .subcommand(
            Command::new("cart")
                .about("Interactive grocery shopping cart")
                .arg(
                    Arg::new("file")
                        .short('f')
                        .long("file")
                        .value_name("FILE")
                        .help("Read commands from a file instead of stdin"),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    let level = if matches.get_flag("verbose") { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match execute(&matches, &mut out).and_then(|()| out.flush().map_err(Into::into)) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("labs: {e:#}");
            process::exit(1);
        }
    }
}

fn execute<W: Write>(matches: &ArgMatches, out: &mut W) -> Result<(), anyhow::Error> {
    let Some((name, sub)) = matches.subcommand() else {
        anyhow::bail!("no subcommand given");
    };
    debug!("running {name}");

    match name {
        "generics" => demo::run_generics_demo(out)?,
        "map" => demo::run_map_demo(out)?,
        "sets" => demo::run_set_demo(out)?,
        "queue" => demo::run_queue_demo(out)?,
        "letters" => execute_letters(sub, out)?,
        "deli" => {
            let customers = sub
                .get_one::<usize>("customers")
                .copied()
                .unwrap_or(deli::DEFAULT_CUSTOMERS);
            let start = sub
                .get_one::<u32>("start")
                .copied()
                .unwrap_or(deli::DEFAULT_FIRST_TICKET);
            deli::run_deli(customers, start, out)?;
        }
        "cart" => execute_cart(sub, out)?,
        other => anyhow::bail!("unknown subcommand {other}"),
    }
    Ok(())
}

fn execute_letters<W: Write>(sub: &ArgMatches, out: &mut W) -> Result<(), anyhow::Error> {
    let text = match sub.get_one::<String>("file") {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("cannot read {path}"))?
        }
        None => sub
            .get_one::<String>("text")
            .cloned()
            .unwrap_or_else(|| letters::DEFAULT_TEXT.to_string()),
    };

    let counts = letters::count_letters(&text);
    if sub.get_flag("json") {
        letters::render_frequencies_json(&counts, out)?;
    } else {
        letters::render_frequencies(&counts, out)?;
    }
    Ok(())
}

fn execute_cart<W: Write>(sub: &ArgMatches, out: &mut W) -> Result<(), anyhow::Error> {
    match sub.get_one::<String>("file") {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("cannot open {path}"))?;
            cart::run_session(BufReader::new(file), out)?;
        }
        None => {
            cart::run_session(io::stdin().lock(), out)?;
        }
    }
    Ok(())
}
