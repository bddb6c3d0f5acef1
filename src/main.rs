use std::{fs, process};

use clap::Parser;
use tally::{CalcError, evaluate, format_postfix, to_postfix};

/// tally evaluates arithmetic expressions such as `(11 + 2) 12` or
/// `-5 / -4 % 3`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tally to read expressions from a file, one per line, instead of
    /// evaluating the argument itself. Blank lines and lines starting with
    /// `#` are skipped.
    #[arg(short, long)]
    file: bool,

    /// Prints the expression in reverse-Polish order instead of its value.
    #[arg(short, long)]
    postfix: bool,

    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if !args.file {
        if let Err(e) = report(&args.contents, args.postfix) {
            eprintln!("{e}");
            process::exit(1);
        }
        return;
    }

    let script = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               &args.contents);
                     process::exit(1);
                 });

    for (index, line) in script.lines().enumerate() {
        let expression = line.trim();
        if expression.is_empty() || expression.starts_with('#') {
            continue;
        }
        if let Err(e) = report(expression, args.postfix) {
            eprintln!("Line {}: {e}", index + 1);
            process::exit(1);
        }
    }
}

fn report(expression: &str, postfix: bool) -> Result<(), CalcError> {
    if postfix {
        println!("{}", format_postfix(&to_postfix(expression)?));
    } else {
        println!("{}", evaluate(expression)?);
    }
    Ok(())
}
