use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use log::LevelFilter;
use post_screen::config::loader::{load_config, write_default_config};
use post_screen::{ContentModerator, ModerationConfig};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io::Read;
use std::process;

fn main() {
    let matches = Command::new("post-screen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Screens drafted posts for policy violations and scores their quality")
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .help("Content files to evaluate (reads stdin if none provided)")
                .num_args(0..),
        )
        .arg(
            Arg::new("title")
                .short('t')
                .long("title")
                .value_name("TITLE")
                .help("Title to evaluate alongside the content")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("YAML configuration file (built-in tables when omitted)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Write the default configuration as YAML and exit")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("test-config")
                .long("test-config")
                .help("Validate the configuration and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("suggest-only")
                .long("suggest-only")
                .help("Print only improvement suggestions")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .help("Seed for suggestion phrasing, for reproducible output")
                .value_parser(clap::value_parser!(u64))
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    if let Some(path) = matches.get_one::<String>("generate-config") {
        write_default_config(path)?;
        println!("Default configuration written to {path}");
        return Ok(());
    }

    let config = match matches.get_one::<String>("config") {
        Some(path) => load_config(path)?,
        None => ModerationConfig::default(),
    };

    if matches.get_flag("test-config") {
        ContentModerator::new(config.clone()).context("Configuration validation failed")?;
        println!("Configuration OK");
        println!("  Banned words: {}", config.banned_words.len());
        println!("  Inappropriate phrases: {}", config.inappropriate_phrases.len());
        println!("  Suspicious patterns: {}", config.suspicious_patterns.len());
        for category in &config.contextual_categories {
            println!(
                "  Category {}: {} patterns",
                category.name,
                category.patterns.len()
            );
        }
        return Ok(());
    }

    let moderator = ContentModerator::new(config)?;
    let title = matches.get_one::<String>("title").map(String::as_str);
    let suggest_only = matches.get_flag("suggest-only");

    let mut rng: Box<dyn RngCore> = match matches.get_one::<u64>("seed") {
        Some(seed) => Box::new(StdRng::seed_from_u64(*seed)),
        None => Box::new(rand::thread_rng()),
    };

    let files: Vec<&String> = matches
        .get_many::<String>("files")
        .map(|values| values.collect())
        .unwrap_or_default();

    let inputs = if files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        vec![input]
    } else {
        files
            .iter()
            .map(|path| {
                std::fs::read_to_string(path).with_context(|| format!("Error reading {path}"))
            })
            .collect::<Result<Vec<_>>>()?
    };

    for content in &inputs {
        let output = if suggest_only {
            serde_json::to_string_pretty(&moderator.suggest_with_rng(content, title, &mut rng))?
        } else {
            let result = moderator.evaluate_with_rng(content, title, &mut rng);
            log::info!(
                "{} (score {:.1})",
                if result.approved { "approved" } else { "flagged" },
                result.quality_score
            );
            serde_json::to_string_pretty(&result)?
        };
        println!("{output}");
    }

    Ok(())
}
