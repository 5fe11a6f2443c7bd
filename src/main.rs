#[macro_use]
extern crate clap;
use clap::{Arg, ArgMatches};
use colored::*;
use console::style;
use std::path::Path;
use std::process;
use tacopt::environment;
use tacopt::error::Result;
use tacopt::loader;
use tacopt::optimization::ConstantFolding;
use tacopt::util::DumpToFile;

fn main() {
    let arguments = app_from_crate!()
        .arg(
            Arg::with_name("environment_file")
                .short("e")
                .long("env")
                .value_name("FILE")
                .help("Sets environment file to use")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("literals")
                .long("literals")
                .value_name("POLICY")
                .possible_values(&["permissive", "strict"])
                .help("Sets which operands count as integer literals (overwrites environment)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("malformed_literals")
                .long("malformed")
                .value_name("POLICY")
                .possible_values(&["reject", "pass-through"])
                .help("Sets how unparsable literals are handled (overwrites environment)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("debug")
                .short("d")
                .long("debug")
                .help("Enables debug mode"),
        )
        .arg(
            Arg::with_name("output_file")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Writes the optimized program into the file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("input_file")
                .value_name("FILE")
                .help("TAC program to be optimized (.tac listing or .yaml)")
                .required(true)
                .index(1),
        )
        .get_matches();

    if let Err(e) = tacopt(&arguments) {
        println!("{}", style(e).bold().red());
        process::exit(-1);
    }
}

fn build_environment(arguments: &ArgMatches) -> Result<environment::Environment> {
    use environment::*;

    let mut env = if let Some(file_path) = arguments.value_of("environment_file") {
        // Load given environment file
        let env_file = Path::new(file_path);
        if !env_file.is_file() {
            return Err(format!("Environment file '{}' does not exist", file_path).into());
        }
        Environment::from_file(env_file)?
    } else {
        // Try to find an environment file for the current input
        let input_file = Path::new(arguments.value_of("input_file").unwrap_or_default());
        let env_file = input_file.with_extension("env.yaml");
        if env_file.is_file() {
            println!(
                "Using environment defined in '{}'",
                style(env_file.display()).yellow()
            );
            Environment::from_file(&env_file)?
        } else {
            Environment::default()
        }
    };

    if let Some(policy) = arguments.value_of("literals") {
        env.literals = match policy {
            "strict" => LiteralPolicy::Strict,
            _ => LiteralPolicy::Permissive,
        };
    }

    if let Some(policy) = arguments.value_of("malformed_literals") {
        env.malformed_literals = match policy {
            "pass-through" => MalformedLiteralPolicy::PassThrough,
            _ => MalformedLiteralPolicy::Reject,
        };
    }

    if arguments.is_present("debug") {
        env.debug = true;
    }

    Ok(env)
}

fn tacopt(arguments: &ArgMatches) -> Result<()> {
    let input_file = arguments
        .value_of("input_file")
        .ok_or("No input file given")?;

    let env = build_environment(arguments)?;

    if env.debug {
        println!("{}:\n{}\n---", "Environment".bold(), style(&env).cyan());
    }

    println!(
        "{} Loading program '{}'",
        style("[1/3]").bold().dim(),
        input_file.yellow()
    );
    let program = loader::load_program(Path::new(input_file))?;

    println!("{}", "Original program:".bold());
    print!("{}", program);

    println!("{} Optimizing ...", style("[2/3]").bold().dim());
    let optimized = ConstantFolding::new_from_env(&env).optimize(&program)?;
    for folding in optimized.foldings() {
        println!("    {}", style(format!("// {}", folding)).dim());
    }

    println!(
        "{} Optimized program ({} folded):",
        style("[3/3]").bold().dim(),
        optimized.foldings().len()
    );
    print!("{}", style(optimized.program()).green());

    if let Some(path) = arguments.value_of("output_file") {
        optimized.program().dump_to_file(Path::new(path))?;
    }

    Ok(())
}
