use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as ReplResult};

use treewalk::{evaluate, parse, run, tokenize_file, Error, Locatable};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to run. Starts the REPL when omitted.
    script: Option<String>,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    /// Print the parsed program before evaluating
    #[arg(long)]
    ast: bool,
}

fn main() -> Result<(), String> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.script {
        Some(ref script) => run_script(script, &cli)?,
        None => run_repl().map_err(|e| e.to_string())?,
    }
    Ok(())
}

fn run_script(filename: &str, cli: &Cli) -> Result<(), String> {
    let tokens = tokenize_file(filename)?;
    if cli.tokens {
        println!("Tokens:");
        for token in tokens.iter() {
            println!("{:}", token);
        }
    }
    let (program, errors) = parse(&tokens);
    if cli.ast {
        println!("\nParsed result:");
        for statement in program.statements.iter() {
            println!("\n{:?}", statement);
        }
    }
    if !errors.is_empty() {
        for error in errors.iter() {
            println!("{}", error);
        }
        return Err(format!("{} parse errors in {}", errors.len(), filename));
    }
    if let Some(value) = evaluate(&program) {
        println!("{}", value);
    }
    Ok(())
}

fn run_repl() -> ReplResult<()> {
    let mut rl = DefaultEditor::new()?;
    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                match run(&line) {
                    Ok(Some(value)) => println!("{}", value),
                    Ok(None) => {}
                    Err(errors) => print_errors(&line, &errors),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

fn print_errors(line: &str, errors: &[Error]) {
    for error in errors {
        println!("  {}", line);
        let column = error.span().start.column.max(1);
        println!("  {}^ {}", " ".repeat(column - 1), error);
    }
}
