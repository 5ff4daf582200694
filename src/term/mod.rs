extern crate ansi_term;
extern crate clap;
extern crate linefeed;
use ansi_term::Style;
use clap::Parser;
use cradle::{error, lang::Error, mach};
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

mod console;
use console::Console;

/// Evaluates or compiles statements ended by a `;` line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Emit 68000 assembly instead of running the program.
    #[arg(short, long)]
    compile: bool,

    /// Source file. Reads standard input when omitted.
    file: Option<PathBuf>,
}

pub fn main() {
    let args = Args::parse();
    if let Err(error) = run(&args) {
        abort(&error);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let stdout = io::stdout();
    let out = stdout.lock();
    match &args.file {
        Some(path) => {
            let source = fs::read_to_string(path).map_err(|e| {
                error!(InternalError; &format!("{}: {}", path.display(), e))
            })?;
            execute(args.compile, source.chars(), out)
        }
        None if io::stdin().is_terminal() => execute(args.compile, Console::new()?, out),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            execute(args.compile, source.chars(), out)
        }
    }
}

fn execute<I, W>(compile: bool, chars: I, out: W) -> Result<(), Error>
where
    I: Iterator<Item = char>,
    W: Write,
{
    if compile {
        mach::compile(chars, out)?;
    } else {
        mach::interpret(chars, out)?;
    }
    Ok(())
}

fn abort(error: &Error) -> ! {
    let _ = io::stdout().flush();
    let message = format!("Error: {}", error);
    let stderr = io::stderr();
    let mut stderr = stderr.lock();
    let _ = writeln!(stderr);
    if stderr.is_terminal() {
        let _ = writeln!(stderr, "{}", Style::new().bold().paint(message));
    } else {
        let _ = writeln!(stderr, "{}", message);
    }
    let _ = writeln!(stderr, "Aborting...");
    std::process::exit(1);
}
