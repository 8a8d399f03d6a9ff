use clap::Parser;
use std::process::ExitCode;
use textscan_cli::args::{JsonKeysArgs, long_flags};
use textscan_cli::parsers::normalize_single_dash_flags;
use textscan_cli::{app, logging};

fn main() -> ExitCode {
    let argv = normalize_single_dash_flags(std::env::args_os(), &long_flags::<JsonKeysArgs>());
    let args = JsonKeysArgs::parse_from(argv);
    logging::init(args.verbose);

    let stdout = std::io::stdout();
    match app::run_json_keys(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
