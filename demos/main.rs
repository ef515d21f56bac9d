use clap::Parser as CliParser;
use log::{error, info};
use monkeyrs::eval_source;

/// Evaluates a single source file and prints the resulting value's
/// `inspect()` rendering. Not a REPL: one file in, one value out.
#[derive(CliParser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long)]
    file: std::path::PathBuf,
}

fn main() {
    simple_logger::init_with_level(log::Level::Warn).unwrap();
    let args = Cli::parse();

    let source = std::fs::read_to_string(&args.file).unwrap_or_else(|err| {
        error!("could not read {}: {err}", args.file.display());
        std::process::exit(1);
    });

    let (value, errors) = eval_source(&source);
    if !errors.is_empty() {
        for err in errors {
            error!("{err}");
        }
        std::process::exit(1);
    }

    info!("evaluated {}", args.file.display());
    println!("{value}");
}
