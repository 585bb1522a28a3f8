//! veneer - HTML round-trip tool

use std::fs;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use veneer::serialize::{SerializeOpts, escape_entities};
use veneer::{parse_document, parse_fragment, serialize_to};

#[derive(Parser)]
#[command(name = "veneer")]
#[command(version, about = "HTML round-trip tool", long_about = None)]
#[command(after_help = "EXAMPLES:
    veneer page.html                Parse and re-serialize a document
    veneer --fragment part.html     Treat the input as a body fragment
    veneer --escape page.html       Serialize with entity escaping")]
struct Cli {
    /// Input HTML file
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Parse the input as a body fragment instead of a full document
    #[arg(long)]
    fragment: bool,

    /// Apply entity escaping instead of the identity pass-through
    #[arg(long)]
    escape: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> veneer::Result<()> {
    let source = String::from_utf8(fs::read(&cli.input)?)?;

    let root = if cli.fragment {
        parse_fragment(&source)
    } else {
        parse_document(&source)
    };

    let mut opts = SerializeOpts::default();
    if cli.escape {
        opts.escape = escape_entities;
    }

    match &cli.output {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            serialize_to(&mut file, &root, &opts)?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            serialize_to(&mut handle, &root, &opts)?;
            handle.write_all(b"\n")?;
        }
    }

    Ok(())
}
