use clap::Parser;
use std::process::ExitCode;
use textscan_cli::args::{WordFreqArgs, long_flags};
use textscan_cli::parsers::normalize_single_dash_flags;
use textscan_cli::{app, logging};

fn main() -> ExitCode {
    let argv = normalize_single_dash_flags(std::env::args_os(), &long_flags::<WordFreqArgs>());
    let args = WordFreqArgs::parse_from(argv);
    logging::init(args.verbose);

    let stdout = std::io::stdout();
    match app::run_word_freq(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
