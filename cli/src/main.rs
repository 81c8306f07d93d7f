use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use protochain::{Loader, ObjectRef, ProtoError, Value, chain_of, enumerable};

mod repl;

#[derive(Parser)]
#[command(
    name = "protochain",
    about = "Inspect JSON documents as prototype-chained objects"
)]
struct Cli {
    /// Path to a .json document to load
    file: Option<String>,
    /// Load an inline JSON document
    #[arg(long)]
    eval: Option<String>,
    /// Path to a .json document used as the prototype of the loaded object
    #[arg(long)]
    prototype: Option<String>,
    /// Print the value resolved for a key
    #[arg(long)]
    get: Option<String>,
    /// Print every key/value pair reachable through the chain
    #[arg(long)]
    each: bool,
    /// Print the objects of the prototype chain
    #[arg(long)]
    chain: bool,
    /// Limit how many prototypes --each and --chain visit
    #[arg(long)]
    depth: Option<usize>,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!(
            "{} {}",
            "protochain".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    if cli.file.is_none() && cli.eval.is_none() {
        if let Err(err) = repl::run(None) {
            eprintln!("{} {err}", "repl error:".red().bold());
            process::exit(1);
        }
        return;
    }

    let obj = match load(&cli) {
        Ok(obj) => obj,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            process::exit(1);
        }
    };

    if cli.get.is_none() && !cli.each && !cli.chain {
        if let Err(err) = repl::run(Some(obj)) {
            eprintln!("{} {err}", "repl error:".red().bold());
            process::exit(1);
        }
        return;
    }

    if let Some(key) = &cli.get {
        match obj.get(key) {
            Some(value) => println!("{}", format_value(&value)),
            None => println!("{}", "undefined".bright_black()),
        }
    }

    if cli.each {
        for (key, value) in enumerable::each(&obj, cli.depth) {
            println!("{} {}", format!("{key}:").cyan(), format_value(&value));
        }
    }

    if cli.chain {
        for (level, node) in chain_of(&obj, cli.depth).iter().enumerate() {
            println!(
                "{} {}",
                format!("[{level}]").bright_black(),
                Value::from(node)
            );
        }
    }
}

fn load(cli: &Cli) -> Result<ObjectRef, ProtoError> {
    let mut loader = Loader::new();
    if let Some(path) = &cli.file {
        loader = loader.path(path);
    }
    if let Some(source) = &cli.eval {
        loader = loader.string(source.as_str());
    }
    if let Some(path) = &cli.prototype {
        let prototype = Loader::new().path(path).load_object()?;
        loader = loader.prototype(&prototype);
    }
    Ok(loader.load_object()?)
}

pub(crate) fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{s:?}").green().to_string(),
        Value::Number(_) | Value::Boolean(_) => value.to_string().yellow().to_string(),
        Value::Null => "null".bright_black().to_string(),
        Value::Function(_) => value.to_string().magenta().to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
