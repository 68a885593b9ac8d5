use std::io::Read;

use anyhow::Result;
use clap::Parser;

use exprlint::process;

/// Command-line front-end for the expression syntax checker.
///
/// Display-only collaborator of the core: it passes the raw text through
/// unchanged and renders whatever comes back.
#[derive(Debug, Parser)]
#[command(name = "exprlint")]
#[command(about = "Syntax checker for assignment expressions like 'x = (5 + 3);'")]
#[command(version)]
struct Args {
    /// Expression to check; read from stdin when omitted
    expression: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let input = match args.expression {
        Some(expression) => expression,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let report = process(&input);

    // On any syntax error, show the message only; otherwise list each
    // token's kind and lexeme in source order.
    if report.has_error() {
        println!("{}", report.message);
        std::process::exit(1);
    }

    if let Some(tokens) = report.tokens {
        for token in tokens {
            println!("{token}");
        }
    }

    Ok(())
}
