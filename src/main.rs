use anyhow::Result;
use clap::Parser;
use keypadcalc::{repl, Config, Operation};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "keypadcalc")]
#[command(about = "Keypad calculator: + - × ÷ % ^ and logarithms", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Operation selected at start (add, sub, mul, div, mod, pow, log)
    #[arg(long)]
    op: Option<Operation>,

    /// Disable coloured output
    #[arg(long)]
    no_colour: bool,

    /// Evaluate once and exit: OP A [B or BASE]
    #[arg(
        long,
        num_args = 2..=3,
        value_names = ["OP", "A", "B"],
        allow_hyphen_values = true
    )]
    eval: Option<Vec<String>>,

    /// More log output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config)?;
    if let Some(op) = cli.op {
        config.operation = op;
    }
    if cli.no_colour {
        config.colour = false;
    }

    if let Some(args) = cli.eval {
        let operation: Operation = args[0].parse()?;
        let operand = args.get(2).map(String::as_str);
        return match repl::eval_once(&config, operation, &args[1], operand) {
            Ok(result) => {
                println!("{}", result);
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                eprintln!("{}: {}", err.category().title(), err);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    repl::run(&config)?;
    Ok(ExitCode::SUCCESS)
}
