//! longpaths: find files whose full path exceeds a length limit
//! Writes long/short reports into the scanned folder and optionally zips the long files.

use anyhow::Result;
use clap::{Arg, ArgAction, Command as ClapCommand};
use std::path::PathBuf;

use longpaths::commands::{handle_check_command, handle_config_command, CheckArgs, ConfigArgs};
use longpaths::CheckError;

fn build_cli() -> ClapCommand {
    ClapCommand::new("longpaths")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find files whose full path is longer than a limit")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            ClapCommand::new("check")
                .about("Scan a folder, write long/short reports and zip the long files")
                .arg(
                    Arg::new("root")
                        .help("Folder to scan")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("limit")
                        .short('l')
                        .long("limit")
                        .help("Maximum path length in characters (defaults to the saved setting)")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(
                    Arg::new("no-zip")
                        .long("no-zip")
                        .help("Do not archive the long files")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            ClapCommand::new("config")
                .about("Show or change the saved default length limit")
                .arg(
                    Arg::new("limit")
                        .short('l')
                        .long("limit")
                        .help("New default length limit")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(
                    Arg::new("reset")
                        .long("reset")
                        .help("Restore the default length limit")
                        .action(ArgAction::SetTrue),
                ),
        )
}

async fn run() -> Result<()> {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", sub)) => {
            let args = CheckArgs {
                root: sub.get_one::<PathBuf>("root").cloned(),
                limit: sub.get_one::<i64>("limit").copied(),
                archive: !sub.get_flag("no-zip"),
            };
            handle_check_command(args).await
        }
        Some(("config", sub)) => {
            let args = ConfigArgs {
                limit: sub.get_one::<i64>("limit").copied(),
                reset: sub.get_flag("reset"),
            };
            handle_config_command(args)
        }
        _ => unreachable!("subcommand_required is set"),
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::debug!("Starting longpaths v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        eprintln!("❌ {e:#}");
        if e
            .downcast_ref::<CheckError>()
            .is_some_and(CheckError::is_validation)
        {
            eprintln!("   Run `longpaths check --help` for usage.");
        }
        std::process::exit(1);
    }
}
