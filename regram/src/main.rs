use clap::Parser;
use clap::ValueEnum;
use colored::Colorize;
use grammar::DedupScope;
use grammar::DerivationOptions;
use grammar::DeriveError;
use grammar::Grammar;
use grammar::GrammarFormat;
use grammar::KleeneSymbols;
use grammar::LinearGrammar;
use grammar::Source;
use matcher::SyntaxError;
use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Derive a linear grammar and write it to the working directory
    Gld,
    /// Ask for a string and report whether the expression matches it
    Eval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Dedup {
    Scan,
    Global,
}

impl From<Dedup> for DedupScope {
    fn from(value: Dedup) -> Self {
        match value {
            Dedup::Scan => DedupScope::Scan,
            Dedup::Global => DedupScope::Global,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KleeneAdvance {
    PerScan,
    PerMatch,
}

impl From<KleeneAdvance> for KleeneSymbols {
    fn from(value: KleeneAdvance) -> Self {
        match value {
            KleeneAdvance::PerScan => KleeneSymbols::PerScan,
            KleeneAdvance::PerMatch => KleeneSymbols::PerMatch,
        }
    }
}

/// Turns a restricted regular expression into a linear grammar, or matches
/// a string against it.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// File holding the terminal line followed by the expression
    input: PathBuf,
    /// `gld` or `eval`, optionally written with a leading dash
    #[arg(allow_hyphen_values = true, value_parser = parse_mode)]
    mode: Mode,
    /// Base name of the grammar file written in gld mode
    output: Option<String>,
    /// Reach of duplicate detection while reducing OR groups
    #[arg(long, value_enum, default_value_t = Dedup::Scan)]
    dedup: Dedup,
    /// Whether starred groups found together share a symbol
    #[arg(long, value_enum, default_value_t = KleeneAdvance::PerScan)]
    kleene_symbols: KleeneAdvance,
    /// Print the derivation steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Error, Debug)]
enum AppError {
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("could not read the candidate string: {0}")]
    Stdin(io::Error),
    #[error("gld mode needs an output name")]
    MissingOutput,
    #[error(transparent)]
    Derive(#[from] DeriveError),
    #[error("invalid expression: {0}")]
    Pattern(#[from] SyntaxError),
}

fn parse_mode(selector: &str) -> Result<Mode, String> {
    let selector = selector.strip_prefix('-').unwrap_or(selector);
    Mode::from_str(selector, true)
}

fn trace(grammar: &Grammar) {
    for rule in grammar.or_rules.iter().chain(&grammar.kleene_rules) {
        eprintln!("rule: {rule}");
    }
    eprintln!("reduced expression: {}", grammar.expression);
}

fn write_grammar(args: &Cli, content: &str) -> Result<bool, AppError> {
    let output = args.output.as_ref().ok_or(AppError::MissingOutput)?;
    let options = DerivationOptions {
        dedup: args.dedup.into(),
        kleene: args.kleene_symbols.into(),
    };
    let grammar = grammar::derive(content, options)?;
    if args.verbose {
        trace(&grammar);
    }

    let format = LinearGrammar;
    let path = PathBuf::from(format!("{output}{}", format.extension()));
    std::fs::write(&path, format.render(&grammar)).map_err(|source| AppError::Write {
        path: path.clone(),
        source,
    })?;
    if args.verbose {
        eprintln!("wrote {}", path.display());
    }
    Ok(true)
}

fn read_candidate() -> Result<String, AppError> {
    print!("Enter a string: ");
    io::stdout().flush().map_err(AppError::Stdin)?;

    let mut stdin_buffer = String::new();
    io::stdin()
        .read_line(&mut stdin_buffer)
        .map_err(AppError::Stdin)?;
    Ok(stdin_buffer
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string())
}

fn evaluate(args: &Cli, content: &str) -> Result<bool, AppError> {
    let expression = Source::parse(content).map_err(DeriveError::from)?.expression;
    let candidate = read_candidate()?;
    if args.verbose {
        eprintln!("flattened expression: {}", matcher::flatten(expression));
    }

    let accepted = matcher::accepts(expression, &candidate)?;
    if accepted {
        println!("{}", "String accepted".green());
    } else {
        println!("{}", "String rejected".red());
    }
    Ok(accepted)
}

fn run(args: &Cli) -> Result<bool, AppError> {
    let content = std::fs::read_to_string(&args.input).map_err(|source| AppError::Read {
        path: args.input.clone(),
        source,
    })?;

    match args.mode {
        Mode::Gld => write_grammar(args, &content),
        Mode::Eval => evaluate(args, &content),
    }
}

fn main() -> ExitCode {
    let args = Cli::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
