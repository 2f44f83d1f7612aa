use log::{debug, error, info, warn};
use simplelog::{ConfigBuilder, TermLogger, TerminalMode};
use std::convert::TryFrom;
use std::process;
use structopt::StructOpt;
use weather_notifier::DEFAULT_LOG_LEVEL;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = weather_notifier::Args::from_args();

    let log_level = args.log_level();
    let log_config = ConfigBuilder::new().set_time_to_local(true).build();
    TermLogger::init(
        log_level.unwrap_or(DEFAULT_LOG_LEVEL),
        log_config,
        TerminalMode::Mixed,
    )?;
    debug!("logger initialized");

    if let Err(bad) = log_level {
        warn!(
            "LOG_LEVEL {:?} is not a log level, using {}",
            bad, DEFAULT_LOG_LEVEL
        );
    }

    // Missing credentials end the run here, before any request is made.
    let config = match weather_notifier::Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let outcome = weather_notifier::run(&config);
    info!("Run complete ({})", outcome);

    Ok(())
}
