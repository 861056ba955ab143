use std::process::ExitCode;

use bmi::{
    calc::{run_calc, CalcOutput},
    config::{CliConfig, OutputFormat},
    demo::run_demo,
    error::CliResult,
};
use clap::{Parser, Subcommand};
use dotenv::dotenv;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(
        long,
        value_enum,
        global = true,
        env = "BMI_OUTPUT_FORMAT",
        default_value = "text"
    )]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the built-in sample measurements
    Demo {},

    /// Evaluate a single measurement
    Calc {
        /// Weight in kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Height in meters
        #[arg(long, allow_negative_numbers = true)]
        height: f64,
    },
}

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();
    let cli = Cli::parse();

    let config = CliConfig::new(cli.format);

    let result = match cli.command.unwrap_or(Commands::Demo {}) {
        Commands::Demo {} => demo(&config),
        Commands::Calc { weight, height } => calc(&config, weight, height),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn demo(config: &CliConfig) -> CliResult<ExitCode> {
    let out = run_demo(config)?;
    for line in out.stdout {
        println!("{}", line);
    }
    for line in out.stderr {
        eprintln!("{}", line);
    }
    Ok(ExitCode::SUCCESS)
}

fn calc(config: &CliConfig, weight: f64, height: f64) -> CliResult<ExitCode> {
    match run_calc(config, weight, height)? {
        CalcOutput::Evaluated(line) => {
            println!("{}", line);
            Ok(ExitCode::SUCCESS)
        }
        CalcOutput::Rejected(line) => {
            eprintln!("{}", line);
            Ok(ExitCode::FAILURE)
        }
    }
}
