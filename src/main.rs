use std::io::{self, BufRead, Write};

use clap::Parser;
use exprsec::{
    calc::{evaluate, parse_arithmetic, SymbolTable, ARITHMETIC_TABLE},
    errors::errors::{Error, ErrorTip},
};
use log::debug;

/// Integer calculator over `=`, `+`, `*` and prefix `++`.
#[derive(Parser, Debug)]
#[command(name = "exprsec", version, about)]
struct Args {
    /// Evaluate a single expression and exit
    #[arg(short, long)]
    expr: Option<String>,

    /// Print the parenthesized tree before each value
    #[arg(short, long)]
    tree: bool,

    /// Do not print the prompt
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    let mut symbols = SymbolTable::new();

    if let Some(expr) = &args.expr {
        if !run_line(expr, &args, &mut symbols) {
            std::process::exit(1);
        }
        return;
    }

    if let Err(error) = repl(&args, &mut symbols) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}

fn repl(args: &Args, symbols: &mut SymbolTable) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        if !args.quiet {
            write!(stdout, ">>> ")?;
            stdout.flush()?;
        }

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        run_line(line, args, symbols);
    }
}

// Prints the result of one line. Returns false when it could not be parsed
// or evaluated.
fn run_line(line: &str, args: &Args, symbols: &mut SymbolTable) -> bool {
    let tree = match parse_arithmetic(line) {
        Ok(tree) => tree,
        Err(error) => {
            debug!("rejected {:?}: {}", line, error);
            println!("Invalid parse");
            return false;
        }
    };

    if args.tree {
        println!("{}", tree.to_bracketed(&ARITHMETIC_TABLE));
    }

    match evaluate(&tree, symbols) {
        Ok(value) => {
            debug!("{} symbol(s) bound", symbols.len());
            println!("{}", value);
            true
        }
        Err(error) => {
            display_error(&error);
            false
        }
    }
}

fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}: {}", error.get_error_name(), error);
    } else {
        println!("Error: {}: {} ({})", error.get_error_name(), error, error.get_tip());
    }
}
