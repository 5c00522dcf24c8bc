use clap::{value_parser, Arg, ArgMatches, Command};
use colored::Colorize;
use log::info;
use std::io;
use std::time::{Duration, Instant};

use sort_visualizer::config::{Settings, CLI_MAX_VALUE};
use sort_visualizer::input::{parse_values, rng_from_seed, Prompt};
use sort_visualizer::{visualizer, Algorithm, Outcome};

fn cli() -> Command {
    Command::new("sort_visualizer")
        .about("Bubble, merge, quick and radix sort plus linear search, timed or animated")
        .arg(
            Arg::new("seed")
                .long("seed")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Seed for random arrays"),
        )
        .subcommand(Command::new("compare").about("Time every algorithm on one array (default)"))
        .subcommand(
            Command::new("visual")
                .about("Animate the algorithms in the terminal")
                .arg(
                    Arg::new("count")
                        .long("count")
                        .value_parser(value_parser!(usize))
                        .help("Number of bars"),
                )
                .arg(
                    Arg::new("min")
                        .long("min")
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i32)),
                )
                .arg(
                    Arg::new("max")
                        .long("max")
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i32)),
                )
                .arg(
                    Arg::new("height")
                        .long("height")
                        .value_parser(value_parser!(i32)),
                )
                .arg(
                    Arg::new("tick-ms")
                        .long("tick-ms")
                        .value_parser(value_parser!(u64))
                        .help("Milliseconds per step"),
                ),
        )
        .subcommand(
            Command::new("steps")
                .about("Print every step of one algorithm over the given values")
                .arg(Arg::new("algorithm").required(true))
                .arg(
                    Arg::new("target")
                        .long("target")
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i32)),
                )
                .arg(
                    Arg::new("values")
                        .num_args(0..)
                        .allow_negative_numbers(true),
                ),
        )
}

fn settings_from(matches: &ArgMatches) -> Settings {
    let mut settings = Settings::default();
    if let Some(count) = matches.get_one::<usize>("count") {
        settings.count = *count;
    }
    if let Some(min) = matches.get_one::<i32>("min") {
        settings.min_value = *min;
    }
    if let Some(max) = matches.get_one::<i32>("max") {
        settings.max_value = *max;
    }
    if let Some(height) = matches.get_one::<i32>("height") {
        settings.height = *height;
    }
    if let Some(tick) = matches.get_one::<u64>("tick-ms") {
        settings.tick = Duration::from_millis(*tick);
    }
    settings.seed = matches.get_one::<u64>("seed").copied();
    settings
}

fn compare(seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());
    let mut rng = rng_from_seed(seed);
    let values = prompt.array(&mut rng, CLI_MAX_VALUE)?;
    println!("Original Array: {:?}", values);
    let target = prompt.target()?;

    for algorithm in Algorithm::ALL {
        let mut copy = values.clone();
        let start = Instant::now();
        let outcome = algorithm.execute(&mut copy, Some(target));
        let elapsed = start.elapsed().as_secs_f64();
        info!("{} took {:.6}s", algorithm, elapsed);
        match outcome {
            Ok(Outcome::Sorted) => println!(
                "{}: {:?}, Time: {:.6} seconds",
                algorithm.name().bold(),
                copy,
                elapsed
            ),
            Ok(Outcome::Searched(Some(index))) => println!(
                "{}: Element found at index {}, Time: {:.6} seconds",
                algorithm.name().bold(),
                index,
                elapsed
            ),
            Ok(Outcome::Searched(None)) => println!(
                "{}: Element not found, Time: {:.6} seconds",
                algorithm.name().bold(),
                elapsed
            ),
            Err(err) => println!("{}: {}", algorithm.name().bold(), err.to_string().red()),
        }
    }
    Ok(())
}

fn steps(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let algorithm: Algorithm = matches
        .get_one::<String>("algorithm")
        .map(String::as_str)
        .unwrap_or_default()
        .parse()?;
    let line = matches
        .get_many::<String>("values")
        .map(|tokens| tokens.cloned().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    let mut values = parse_values(&line)?;
    let target = matches.get_one::<i32>("target").copied();

    let mut run = algorithm.begin_run(&mut values, target)?;
    let mut count = 0;
    while let Some(step) = run.next() {
        count += 1;
        println!("{:>5} {:?} {:?}", count, step.kind, run.values());
    }
    let found = run.found();
    drop(run);

    if algorithm.is_search() {
        match found {
            Some(index) => println!("{} at index {}", "found".green(), index),
            None => println!("{}", "not found".red()),
        }
    }
    println!("{} after {} steps: {:?}", algorithm, count, values);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli().get_matches();
    let (name, sub) = matches.subcommand().unwrap_or(("compare", &matches));
    match name {
        "visual" => visualizer::run(settings_from(sub))?,
        "steps" => steps(sub)?,
        _ => compare(sub.get_one::<u64>("seed").copied())?,
    }
    Ok(())
}
