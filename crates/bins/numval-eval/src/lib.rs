//! # numval-eval
//! Command line front end evaluating accumulation chains over the `numval`
//! value types and printing the result.

pub mod app;
pub mod config;
pub mod error;
pub mod expr;

use app::{CliArgs, SubCommand};
use clap::Parser;
use error::EvalError;

/// Parses the command line, evaluates the expression and prints the result
/// to stdout.
pub fn run() -> Result<(), EvalError> {
    let launch_time = std::time::SystemTime::now();
    let args = CliArgs::parse();
    let config = app::init(&args, launch_time)?;

    let output = match &args.command {
        SubCommand::Complex(opts) => config.render(&expr::eval_complex(&opts.tokens)?),
        SubCommand::Vector(opts) => {
            let vector = expr::eval_vector(&opts.tokens)?;
            config.render(&vector.display(config.style))
        },
    };
    println!("{output}");
    Ok(())
}
