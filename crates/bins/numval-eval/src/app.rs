use crate::{config::Config, error::EvalError};
use numval::VectorStyle;
use std::{io::Write, path::PathBuf};

/// numval-eval command line interface arguments.
#[derive(clap::Parser, Debug)]
#[clap(
    author,
    version,
    about = "Evaluates accumulation chains over complex numbers and vectors."
)]
pub struct CliArgs {
    /// Whether to print verbose information to stderr.
    #[clap(short, long, help = "Use verbose output (log level = 4)")]
    pub verbose: bool,

    /// Whether to show the timestamp in the log.
    #[clap(
        long,
        help = "Show timestamp for each log message in seconds since\nprogram starts"
    )]
    pub log_timestamp: bool,

    /// Verbosity level for the log.
    #[clap(
        long,
        help = "Setting logging verbosity level (higher for more\ndetails)\n  0 - error\n  1 - \
                warn + error\n  2 - info + warn + error\n  3 - debug + info + warn + error\n  4 - \
                trace + debug + info + warn + error\n\x08",
        default_value_t = 1
    )]
    pub log_level: u8,

    /// Path to the user config file.
    #[clap(short, long, help = "Path to the user config file")]
    pub config: Option<PathBuf>,

    /// Rendering of vectors, overrides the config file.
    #[clap(long, value_enum, help = "Vector rendering style")]
    pub style: Option<VectorStyle>,

    /// Digits after the decimal point, overrides the config file.
    #[clap(short, long, help = "Number of digits after the decimal point")]
    pub precision: Option<usize>,

    /// Command to execute.
    #[clap(subcommand)]
    pub command: SubCommand,
}

/// numval-eval command.
#[derive(clap::Subcommand, Debug)]
pub enum SubCommand {
    /// Accumulates complex numbers written as `re,im` or `re`.
    Complex(ExprOptions),
    /// Accumulates vectors written as comma-separated elements.
    Vector(ExprOptions),
}

/// Expression given to a subcommand.
#[derive(clap::Args, Debug)]
pub struct ExprOptions {
    /// Initial operand followed by `<OP> <OPERAND>` pairs.
    #[arg(
        required = true,
        num_args = 1..,
        allow_hyphen_values = true,
        value_name = "TOKEN",
        help = "Initial operand followed by `<OP> <OPERAND>` pairs,\ne.g. `3,4 *= 1,2`"
    )]
    pub tokens: Vec<String>,
}

/// Maps the numeric verbosity level to a log filter.
pub fn log_filter_from_level(level: u8) -> log::LevelFilter {
    match level {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Initialises the logger and resolves the configuration of the run.
///
/// # Arguments
///
/// * `args` - The CLI arguments passed to the program.
/// * `launch_time` - The time when the program is launched.
pub fn init(args: &CliArgs, launch_time: std::time::SystemTime) -> Result<Config, EvalError> {
    let log_level = if args.verbose { 4 } else { args.log_level };
    let timestamp = args.log_timestamp;
    env_logger::builder()
        .format(move |buf, record| {
            let top_level_module = record
                .module_path()
                .and_then(|path| path.split("::").next())
                .unwrap_or("?");
            if timestamp {
                let duration = launch_time.elapsed().unwrap_or_default();
                let millis = duration.as_millis() % 1000;
                let seconds = duration.as_secs() % 60;
                let minutes = (duration.as_secs() / 60) % 60;
                let hours = (duration.as_secs() / 60) / 60;
                writeln!(
                    buf,
                    "{}:{}:{}.{:03} {:5} [{}]: {}",
                    hours,
                    minutes,
                    seconds,
                    millis,
                    record.level(),
                    top_level_module,
                    record.args()
                )
            } else {
                writeln!(
                    buf,
                    "{:5} [{}]: {}",
                    record.level(),
                    top_level_module,
                    record.args()
                )
            }
        })
        .filter_level(log_filter_from_level(log_level))
        .try_init()?;

    log::info!(
        "numval-eval launched at {} on {}.",
        chrono::DateTime::<chrono::Utc>::from(launch_time),
        std::env::consts::OS
    );

    Config::load_config(args.config.as_deref(), args.style, args.precision)
}
