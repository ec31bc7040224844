// lispy - A Lisp-dialect interpreter written in Rust
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::env;
use std::io::{self, Write};
use std::path::Path;

use lispy_core::{eval, load_file, register_builtins, Env};
use lispy_parser::Parser;

const STDLIB_FILE: &str = "stdlib.lispy";

fn main() {
    let args: Vec<String> = env::args().collect();

    // Handle --version flag
    if args.len() == 2 && (args[1] == "--version" || args[1] == "-v") {
        println!("Lispy v{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    // Create environment with builtins
    let env = Env::new();
    register_builtins(&env);

    // Load the standard library from the working directory if present; a
    // load failure is reported but does not prevent startup
    if Path::new(STDLIB_FILE).exists() {
        if let Err(e) = load_file(&env, STDLIB_FILE) {
            println!("Error: {}", e);
        }
    }

    // If files provided, evaluate them; otherwise start REPL
    if args.len() > 1 {
        run_files(&args[1..], &env);
    } else {
        run_repl(&env);
    }
}

/// Evaluate a sequence of source files in the global environment.
fn run_files(files: &[String], env: &Env) {
    for path in files {
        if let Err(e) = load_file(env, path) {
            println!("Error: {}", e);
        }
    }
}

/// Run the interactive REPL.
fn run_repl(env: &Env) {
    println!("Lispy v{}", env!("CARGO_PKG_VERSION"));

    let mut pending = String::new();
    loop {
        print!("lispy> ");
        io::stdout().flush().unwrap();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {
                let line = line.trim_end();

                // A trailing `;` defers parsing until the form is complete;
                // the `;` is replaced by a newline
                if let Some(stripped) = line.strip_suffix(';') {
                    pending.push_str(stripped);
                    pending.push('\n');
                    continue;
                }

                let input = format!("{}{}", pending, line);
                pending.clear();
                if input.trim().is_empty() {
                    continue;
                }

                match Parser::parse_line(&input) {
                    Ok(expr) => match eval(&expr, env) {
                        Ok(result) => println!("{}", result),
                        Err(e) => println!("Error: {}", e),
                    },
                    Err(e) => println!("Parse error: {}", e),
                }
            }
            Err(e) => {
                println!("Read error: {}", e);
                break;
            }
        }
    }
}
