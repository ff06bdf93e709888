//! Monkey interpreter command-line.
//!
//! When called without argument it drops into an interactive
//! read-evaluate-print loop.
//!
//! When called with arguments, it evaluates the corresponding files in a
//! single interpreter session (so code and data sharing is possible).

use std::env;
use std::fs;
use std::io;
use std::io::prelude::*;

use anyhow::Context;

use rmonkey::interpreter::Interpreter;
use rmonkey::object::Object;

const PROMPT: &str = ">> ";

fn main() -> Result<(), anyhow::Error> {
    let args = env::args().skip(1).collect::<Vec<_>>();
    if !args.is_empty() {
        run_all_files(args)?;
    } else {
        run_prompt()?;
    }
    Ok(())
}

fn run_all_files(paths: Vec<String>) -> Result<(), anyhow::Error> {
    let mut interp_stdout = io::stdout();
    let mut interp = Interpreter::new(&mut interp_stdout);

    for p in &paths {
        let source =
            fs::read_to_string(p).with_context(|| format!("failed to read {}", p))?;
        let result = interp
            .eval(&source)
            .with_context(|| format!("syntax errors in {}", p))?;
        if let Some(result) = result {
            if matches!(&*result, Object::Error(_)) {
                println!("{}", result);
            }
        }
    }

    Ok(())
}

fn run_prompt() -> Result<(), io::Error> {
    let stdin = io::stdin();
    let mut repl_stdout = io::stdout();
    let mut interp_stdout = io::stdout();

    let mut interp = Interpreter::new(&mut interp_stdout);

    let mut input = String::new();
    loop {
        repl_stdout.write_all(PROMPT.as_bytes())?;
        repl_stdout.flush()?;

        input.clear();
        let nbytes = stdin.read_line(&mut input)?;
        if nbytes == 0 {
            break;
        }

        match interp.eval(&input) {
            Ok(Some(result)) => println!("{}", result),
            Ok(None) => (),
            Err(errors) => {
                for error in errors.errors() {
                    println!("\t{}", error);
                }
            }
        }
    }

    Ok(())
}
