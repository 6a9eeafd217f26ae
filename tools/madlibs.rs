/// Mad Libs: interactive story generator.
///
/// Usage: madlibs [--verify-integrity] [--stories-dir <dir>] [--config <file.ron>] [--seed <n>] [template]
use madlibs::cli::Cli;
use madlibs::error::MadLibError;
use madlibs::exit_codes;
use madlibs::session::{self, Outcome};
use std::io;
use std::process::ExitCode;

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(cli: Cli) -> Result<Outcome, MadLibError> {
    let options = cli.into_run_options()?;
    let mut rng = session::make_rng(options.config.seed);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    session::run(&options, &mut rng, &mut input, &mut output)
}

fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(Outcome::Verified { .. }) => {
            log::info!("Template is valid. Exiting...");
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Ok(Outcome::Rendered { .. }) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
