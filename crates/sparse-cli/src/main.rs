use clap::{Parser, Subcommand};
use sparse_simple::Program;
use std::io::Read;
use std::path::Path;

#[derive(Parser)]
#[command(name = "sparse")]
#[command(about = "Run simple-language sources through the sparse parser")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a source file and print the value of every variable
    Run {
        /// Input file, or `-` for stdin
        path: String,

        /// Write the rendering to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check a source file for errors without rendering it
    Check {
        /// Input file, or `-` for stdin
        path: String,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run { path, output } => cmd_run(&path, output.as_deref()),
        Command::Check { path } => cmd_check(&path),
    }
}

fn read_source(path: &str) -> String {
    if path == "-" {
        let mut source = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut source) {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        }
        return source;
    }

    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_or_exit(path: &str) -> Program {
    let source = read_source(path);
    log::info!("parsing {path} ({} bytes)", source.len());

    match sparse_simple::Parser::parse(&source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_run(path: &str, output: Option<&str>) {
    let program = parse_or_exit(path);
    let rendered = sparse_simple::render(&program);

    match output {
        Some(out) => {
            if let Err(e) = std::fs::write(out, format!("{rendered}\n")) {
                eprintln!("Error writing {out}: {e}");
                std::process::exit(1);
            }
            eprintln!("Wrote: {out}");
        }
        None => println!("{rendered}"),
    }
}

fn cmd_check(path: &str) {
    let program = parse_or_exit(path);
    eprintln!("OK: {path} ({} variables)", program.variables.len());
}
