use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use rapl::{evaluate_line, Environment, Value};

/// rapl is an APL-flavoured expression language with one expression per
/// line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rapl to read a script file instead of an inline expression.
    #[arg(short, long)]
    file: bool,

    /// The expression to evaluate, or a path to a script when --file is
    /// set. Without it, rapl starts an interactive session.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut env = Environment::new();

    if let Some(contents) = args.contents {
        let script = if args.file {
            fs::read_to_string(&contents).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does \
                           not exist?");
                std::process::exit(1);
            })
        } else {
            contents
        };

        for line in script.lines().filter(|line| !line.trim().is_empty()) {
            report(evaluate_line(line, &mut env));
        }
    } else {
        repl(&mut env);
    }
}

/// Reads and evaluates lines until end of input or a blank line.
fn repl(env: &mut Environment) {
    let stdin = io::stdin();
    prompt();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            break;
        }
        report(evaluate_line(&line, env));
        prompt();
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

fn report(result: Result<Option<Value>, Box<dyn std::error::Error>>) {
    match result {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(e) => eprintln!("{e}"),
    }
}
