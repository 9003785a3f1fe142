mod envelope;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use infix_calculator::interpreter::lexer::tokenize;
use infix_calculator::interpreter::token::tokens_to_string;
use infix_calculator::interpreter::{evaluate, format_value};
use log::{debug, info};
use std::io;
use std::io::Read;
use std::process;

/// Evaluates the given arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate, e.g. "(1 + 2) * 3"
    #[clap(required_unless_present = "json")]
    expression: Option<String>,

    /// Read a JSON request such as {"expression": "1 + 2"} from stdin
    /// and write a JSON response to stdout
    #[clap(long, conflicts_with = "expression")]
    json: bool,

    /// Print the tokens of the expression before evaluating it
    #[clap(long)]
    tokens: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    if args.json {
        return answer_request();
    }

    let expression = args
        .expression
        .context("No expression to evaluate was given")?;

    if args.tokens {
        if let Some(listing) = token_listing(&expression)? {
            println!("{}", listing);
        }
    }

    let value = evaluate(&expression)
        .with_context(|| format!("could not evaluate expression {:?}", expression))?;
    println!("{}", format_value(value));
    Ok(())
}

/// The tokens of `expression` as text, or `None` if it cannot be tokenized.
/// The tokenizer error is reported again when evaluating.
fn token_listing(expression: &str) -> Result<Option<String>> {
    match tokenize(expression) {
        Ok(tokens) => Ok(Some(tokens_to_string(&tokens)?)),
        Err(error) => {
            debug!("No tokens to print for {:?}: {}", expression, error);
            Ok(None)
        }
    }
}

fn answer_request() -> Result<()> {
    let mut body = String::new();
    io::stdin()
        .read_to_string(&mut body)
        .context("Failed to read request from stdin")?;

    let (status, response) = envelope::respond(&body);
    info!("Responding with status {}", status.code());
    let response = serde_json::to_string(&response).context("Failed to encode response")?;
    println!("{}", response);

    if !status.is_success() {
        process::exit(1);
    }
    Ok(())
}
