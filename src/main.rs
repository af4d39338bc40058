use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use clap::Parser;
use funcscript::{
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
    render_error,
};

const PROMPT: &str = "::: ";

#[derive(Parser)]
#[command(name = "funcscript")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse funcscript source and print its syntax tree", long_about = None)]
struct Cli {
    /// Source file to parse; starts a prompt loop when omitted
    file: Option<PathBuf>,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Print phase timings to stderr
    #[arg(long)]
    timings: bool,
}

fn main() {
    let cli = Cli::parse();

    let success = match &cli.file {
        Some(file) => run_file(file, &cli),
        None => run_prompt(&cli),
    };

    if !success {
        process::exit(1);
    }
}

fn run_file(path: &Path, cli: &Cli) -> bool {
    let source = match read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", path.display(), err);
            return false;
        }
    };
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    if cli.tokens {
        print_tokens(&source, Some(file_name), cli.timings);
        return true;
    }

    let start = Instant::now();
    let (parser, program) = parse(source.as_str(), Some(file_name));

    if cli.timings {
        eprintln!("Parsed in {:?}", start.elapsed());
    }

    if !parser.diagnostics().is_empty() {
        for error in parser.diagnostics() {
            println!("{}\n", render_error(error, &source));
        }
        return false;
    }

    println!("{}", program);
    true
}

fn run_prompt(cli: &Cli) -> bool {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", PROMPT);
        if stdout.flush().is_err() {
            return false;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return true,
            Ok(_) => {}
            Err(err) => {
                eprintln!("Failed to read input: {}", err);
                return false;
            }
        }

        if cli.tokens {
            print_tokens(&line, None, cli.timings);
            continue;
        }

        let start = Instant::now();
        let (parser, program) = parse(line, None);

        if cli.timings {
            eprintln!("Parsed in {:?}", start.elapsed());
        }

        if !parser.errors().is_empty() {
            print_parse_errors(&parser.errors());
            continue;
        }

        println!("{}", program);
    }
}

fn print_parse_errors(errors: &[String]) {
    for msg in errors {
        println!("\t{}", msg);
    }
}

fn print_tokens(source: &str, file: Option<String>, timings: bool) {
    let start = Instant::now();
    let tokens = tokenize(source, file);

    if timings {
        eprintln!("Tokenized in {:?}", start.elapsed());
    }

    for token in tokens.iter().filter(|token| token.kind != TokenKind::EOF) {
        println!("{}", token);
    }
}
