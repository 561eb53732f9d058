//! Groundplan CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use groundplan_engine::Strategy;
use groundplan_runtime::{Session, Shell};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    strategy: Option<Strategy>,
    max_nodes: Option<usize>,
    max_depth: Option<usize>,
    seed: Option<u64>,
    trace: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--trace" => config.trace = true,
            "--strategy" => {
                config.strategy = Some(Strategy::from_str(&take_value(&args, &mut i)?)?);
            }
            "--max-nodes" => {
                config.max_nodes = Some(parse_value(&args, &mut i)?);
            }
            "--max-depth" => {
                config.max_depth = Some(parse_value(&args, &mut i)?);
            }
            "--seed" => {
                config.seed = Some(parse_value(&args, &mut i)?);
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

/// Consumes the value following a flag at `*i`.
fn take_value(args: &[String], i: &mut usize) -> Result<String, Box<dyn std::error::Error>> {
    let flag = args[*i].clone();
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value").into())
}

fn parse_value<T: FromStr>(
    args: &[String],
    i: &mut usize,
) -> Result<T, Box<dyn std::error::Error>> {
    let flag = args[*i].clone();
    let value = take_value(args, i)?;
    value
        .parse()
        .map_err(|_| format!("invalid {flag} value: {value}").into())
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("groundplan {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut session = Session::new();
    if let Some(strategy) = config.strategy {
        session.set_strategy(strategy);
    }
    if let Some(nodes) = config.max_nodes {
        session.config_mut().node_ceiling = nodes;
    }
    if let Some(depth) = config.max_depth {
        session.config_mut().depth_ceiling = depth;
    }
    if let Some(seed) = config.seed {
        session.config_mut().seed = Some(seed);
    }
    if config.trace {
        session.tracer_mut().enable();
    }

    // Batch mode: solve each file in turn and exit.
    if config.batch_mode {
        if config.files.is_empty() {
            return Err("batch mode requires at least one problem file".into());
        }
        let mut all_solved = true;
        for file in &config.files {
            session.load_file(file)?;
            println!("{}:", file.display());
            let result = session.solve()?;
            all_solved &= result.outcome.is_success();
            print_result(&session);
        }
        if !all_solved {
            return Err("not every problem was solved".into());
        }
        return Ok(());
    }

    // Interactive: load the last file given (if any), then run the shell.
    let loaded = config.files.last().cloned();
    if let Some(file) = &loaded {
        session.load_file(file)?;
    }

    let mut shell = Shell::new()?.with_session(session);
    if loaded.is_some() {
        shell = shell.without_banner();
    }
    shell.run()?;
    Ok(())
}

fn print_result(session: &Session) {
    let Some(result) = session.last_result() else {
        return;
    };
    match result.plan() {
        Some(plan) => println!("{plan}"),
        None => {
            if let groundplan_engine::SearchOutcome::Failure { reason } = &result.outcome {
                println!("no plan: {reason}");
            }
        }
    }
    println!(
        "({} states generated in {:.2?})",
        result.stats.states_generated, result.stats.elapsed
    );

    if session.tracer().is_enabled() {
        if let Some(problem) = session.problem() {
            let records: Vec<_> = session.tracer().buffer().iter().collect();
            eprintln!("{}", session.tracer().format_records(&records, problem));
        }
    }
}

fn print_help() {
    println!(
        "\x1b[1mGroundplan\x1b[0m - fact-based problem solver

\x1b[1mUSAGE:\x1b[0m
    groundplan [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Problem files to load

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Solve the given files and exit (no shell)
    --strategy NAME    Search strategy: bfs, backtrack, random,
                       priority, means-ends (default: bfs)
    --max-nodes N      Node ceiling for the search graph
    --max-depth N      Depth ceiling for backtracking
    --seed N           RNG seed for random/priority strategies
    --trace            Record and print a search trace

\x1b[1mEXAMPLES:\x1b[0m
    groundplan                            Start the interactive shell
    groundplan monkeys.txt                Load a problem, then shell
    groundplan -b monkeys.txt             Solve and exit
    groundplan -b --strategy backtrack monkeys.txt
    groundplan -b --seed 7 --strategy random monkeys.txt

\x1b[1mSHELL COMMANDS:\x1b[0m
    load <file>        Load a problem file
    solve [strategy]   Run a search
    show               Show the loaded problem
    trace on|off       Toggle tracing
    help               Full command list
    Ctrl+D             Exit"
    );
}
