//! Terminal frontend for the Gloomvault dungeon crawl.
//!
//! A blocking REPL: read one line from stdin, hand it to the game session,
//! print the reply, loop. Quitting, dying, and end-of-input all leave with
//! exit status 0; only I/O failures on the terminal itself are fatal.

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use colored::Colorize;

use gv_core::GameSession;

#[derive(Parser)]
#[command(
    name = "gloomvault",
    about = "Gloomvault — a five-room terminal dungeon crawl",
    version
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut session = GameSession::new();

    println!("{}", "Welcome to Gloomvault!".bold());
    println!("Type 'help' for a list of commands.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match session.process(&line) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }

        if session.ending().is_some() {
            break;
        }
    }

    Ok(())
}
