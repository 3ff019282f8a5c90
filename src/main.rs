use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use weakdb::lexer::{self, format_tokens};
use weakdb::session::{self, Session};

#[derive(Parser)]
#[command(name = "weakdb")]
#[command(author, version, about = "The weakdb command shell", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive REPL (the default)
    Repl {
        /// Print the tokens of every command
        #[arg(long)]
        dump_tokens: bool,
    },

    /// Tokenize a single command and print the tokens
    Lex {
        /// The command text
        input: String,

        /// Print the tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a file of commands, one per line
    Check {
        /// The file to check
        input: PathBuf,

        /// Dump the AST of every valid line as JSON
        #[arg(long)]
        dump_ast: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins over the verbose flag
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(cli.verbose)))
        .init();

    let result = match cli.command {
        None => repl(false),
        Some(Commands::Repl { dump_tokens }) => repl(dump_tokens),
        Some(Commands::Lex { input, json }) => lex(&input, json),
        Some(Commands::Check { input, dump_ast }) => check(input, dump_ast),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Default log filter when `RUST_LOG` is not set.
fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn lex(input: &str, json: bool) -> Result<()> {
    let tokens = lexer::lex(input)?;

    if json {
        println!("{}", lexer::tokens_to_json(&tokens)?);
    } else if !tokens.is_empty() {
        println!("{}", format_tokens(&tokens));
    }

    Ok(())
}

fn check(input: PathBuf, dump_ast: bool) -> Result<()> {
    let summary = session::check_file(&input)
        .with_context(|| format!("Failed to read command file: {:?}", input))?;

    if dump_ast {
        println!("{}", summary.asts_to_json()?);
    }

    let writer = StandardStream::stderr(ColorChoice::Auto);
    summary.emit(&mut writer.lock())?;

    if summary.errors.has_errors() {
        anyhow::bail!(
            "{} of {} commands failed",
            summary.errors.error_count(),
            summary.checked()
        );
    }

    println!(
        "{}: {} commands checked",
        "ok".green().bold(),
        summary.checked()
    );
    Ok(())
}

fn repl(mut dump_tokens: bool) -> Result<()> {
    println!("Welcome to weakdb.");
    println!("Type ':quit' or ':q' to exit, ':help' for help");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new();

    loop {
        // Print prompt
        print!("# ");
        stdout.flush()?;

        // Read input
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }

        // Handle REPL commands
        match line.trim() {
            ":quit" | ":q" => break,
            ":help" | ":h" => {
                println!("REPL commands:");
                println!("  :quit, :q     Exit the REPL");
                println!("  :help, :h     Show this help message");
                println!("  :tokens, :t   Toggle printing the tokens of each command");
                println!("\nAnything else is read as one SQL command.");
                continue;
            }
            ":tokens" | ":t" => {
                dump_tokens = !dump_tokens;
                println!("token dump {}", if dump_tokens { "on" } else { "off" });
                continue;
            }
            _ => {}
        }

        match session.process_line(&line) {
            Ok(outcome) => {
                if dump_tokens && !outcome.tokens.is_empty() {
                    println!("{}", format_tokens(&outcome.tokens));
                }
                println!("{}", "ok".green());
            }
            Err(e) => {
                eprintln!("{}: {}", "error".red(), e);
            }
        }
    }

    log::debug!("processed {} commands", session.commands());
    Ok(())
}
