use clap::Parser;
use std::io;
use std::process::ExitCode;
use text_stats_cli::args::Args;
use text_stats_cli::config::Config;
use text_stats_cli::error::Result;
use text_stats_cli::{input, live, presentation};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();
    let config = Config::from(&args);

    let outcome = if config.live {
        let stdin = io::stdin().lock();
        let mut stdout = io::stdout().lock();
        live::run_live(&config, stdin, &mut stdout).map(|_| ())
    } else {
        run_once(&args, &config)
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_once(args: &Args, config: &Config) -> Result<()> {
    let text = input::collect_text(&args.text, io::stdin().lock())?;
    let report = text_stats_engine::analyze(config, &text)?;
    presentation::print_report(&report, config.format)
}
