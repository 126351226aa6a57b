use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use knap_runtime::*;
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("knap-runtime")
        .about("Solves, generates or evaluates 0/1 knapsack instances")
        .arg_required_else_help(true)
        .arg(arg!(-v --verbose "Enable debug logging").action(ArgAction::SetTrue))
        .arg(
            arg!(--config [CONFIG] "Solver config json string or path to json file")
                .value_parser(clap::value_parser!(String)),
        )
        .subcommand(
            Command::new("solve")
                .about("Computes the best total value of an instance")
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the output will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress "If output file is set, the output will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generates an instance from a seed string")
                .arg(
                    arg!(<SEED> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<TRACK> "Generation parameters, e.g. n_items=100,budget=25")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the instance will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("evaluate")
                .about("Computes the value of a selection of items")
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SELECTION> "Selection json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(Command::new("demo").about("Runs the built-in reference cases"))
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = knap_utils::init_tracing(matches.get_flag("verbose")) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches.get_one::<String>("config").map(String::as_str))?;

    match matches.subcommand() {
        Some(("solve", sub_m)) => {
            let challenge = load_challenge(sub_m.get_one::<String>("INSTANCE").unwrap())?;
            let output = solve(&challenge, &config)?;
            write_output(
                &output,
                sub_m.get_one::<PathBuf>("output").cloned(),
                sub_m.get_flag("compress"),
            )
        }
        Some(("generate", sub_m)) => {
            let challenge = generate(
                sub_m.get_one::<String>("SEED").unwrap(),
                sub_m.get_one::<String>("TRACK").unwrap(),
            )?;
            write_output(&challenge, sub_m.get_one::<PathBuf>("output").cloned(), false)
        }
        Some(("evaluate", sub_m)) => {
            let challenge = load_challenge(sub_m.get_one::<String>("INSTANCE").unwrap())?;
            let selection = load_selection(sub_m.get_one::<String>("SELECTION").unwrap())?;
            write_output(&evaluate(&challenge, &selection)?, None, false)
        }
        Some(("demo", _)) => {
            if !run_demo(&config)? {
                std::process::exit(1);
            }
            Ok(())
        }
        _ => Err(anyhow!("Invalid subcommand")),
    }
}
