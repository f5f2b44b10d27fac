// ABOUTME: Main entry point for the slide-composer program.
// ABOUTME: Provides a CLI to inspect how sections are classified and slides are composed.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use slide_composer::{Config, ParsedSlide, ParsedSlideSection};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single section and print its content node
    Classify(ClassifyArgs),

    /// Compose one slide from section files and print it
    Compose(ComposeArgs),
}

#[derive(Args)]
struct ClassifyArgs {
    /// File holding the raw section text
    input: PathBuf,

    /// Section metadata as KEY=VALUE
    #[arg(long = "meta", value_parser = parse_key_value)]
    meta: Vec<(String, String)>,

    /// Directory relative paths are resolved against (defaults to SLIDES_BASE_DIR or .)
    #[arg(long)]
    base_dir: Option<PathBuf>,
}

#[derive(Args)]
struct ComposeArgs {
    /// Section files, in presentation order
    #[arg(short, long = "section")]
    sections: Vec<PathBuf>,

    /// Slide type tag: title, tabs-on-right or anything else for standard
    #[arg(short = 't', long = "type", default_value = "standard")]
    slide_type: String,

    /// Slide title
    #[arg(long)]
    title: Option<String>,

    /// Section metadata as INDEX:KEY=VALUE (0-based section index)
    #[arg(long = "meta", value_parser = parse_indexed_key_value)]
    meta: Vec<(usize, String, String)>,

    /// Directory relative paths are resolved against (defaults to SLIDES_BASE_DIR or .)
    #[arg(long)]
    base_dir: Option<PathBuf>,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {:?}", s))?;
    Ok((key.to_string(), value.to_string()))
}

fn parse_indexed_key_value(s: &str) -> Result<(usize, String, String), String> {
    let (index, rest) = s
        .split_once(':')
        .ok_or_else(|| format!("expected INDEX:KEY=VALUE, got {:?}", s))?;
    let index = index
        .parse::<usize>()
        .map_err(|e| format!("invalid section index {:?}: {}", index, e))?;
    let (key, value) = parse_key_value(rest)?;
    Ok((index, key, value))
}

fn read_section(path: &Path) -> anyhow::Result<ParsedSlideSection> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read section file {:?}", path))?;
    Ok(ParsedSlideSection::new(content))
}

fn load_config(base_dir: &Option<PathBuf>) -> anyhow::Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(dir) = base_dir {
        config.base_dir = dir.clone();
    }
    Ok(config)
}

fn classify(args: &ClassifyArgs) -> anyhow::Result<()> {
    let config = load_config(&args.base_dir)?;
    let mut section = read_section(&args.input)?;
    section.metadata.extend(args.meta.iter().cloned());

    let classifier = slide_composer::SectionClassifier::new(&config.base_dir, config.theme);
    let node = classifier.classify(&section);
    println!("{:#?}", node);
    Ok(())
}

fn compose(args: &ComposeArgs) -> anyhow::Result<()> {
    let config = load_config(&args.base_dir)?;

    let mut sections = args
        .sections
        .iter()
        .map(|path| read_section(path))
        .collect::<anyhow::Result<Vec<_>>>()?;
    for (index, key, value) in &args.meta {
        let section = sections
            .get_mut(*index)
            .with_context(|| format!("No section at index {} for metadata {:?}", index, key))?;
        section.metadata.insert(key.clone(), value.clone());
    }

    let parsed = ParsedSlide::new(args.title.clone(), args.slide_type.clone(), sections);
    let slide = config.composer().compose(&parsed)?;
    println!("{:#?}", slide);
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Classify(args)) => classify(args),
        Some(Commands::Compose(args)) => compose(args),
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
