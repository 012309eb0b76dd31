//! soaldoc CLI - generated exam-paper Markdown conversion tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use colored::Colorize;

use soaldoc::{
    ConvertOptions, ConversionStats, Converter, JsonFormat, OutputFormat, ParseOptions,
    RenderOptions, Result, RowPolicy,
};

#[derive(Parser)]
#[command(name = "soaldoc")]
#[command(author = "iyulab")]
#[command(version)]
#[command(
    about = "Convert generated exam-paper Markdown to Markdown, text, JSON, and HTML",
    long_about = None
)]
struct Cli {
    /// Response file (stdin if not specified or "-")
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Document title
    #[arg(short, long, env = "SOALDOC_TITLE", default_value = "Lembar Ujian")]
    title: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "markdown")]
    format: Format,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Section keyword (repeatable, replaces the defaults)
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    keywords: Vec<String>,

    /// Drop excess cells without padding short rows
    #[arg(long)]
    no_pad: bool,

    /// Include YAML frontmatter (Markdown only)
    #[arg(long)]
    frontmatter: bool,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Print conversion statistics to stderr
    #[arg(long)]
    stats: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Markdown with pipe tables
    Markdown,
    /// Plain text, tab-separated table rows
    Text,
    /// JSON document tree
    Json,
    /// HTML exam-paper preview
    Html,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Markdown => OutputFormat::Markdown,
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::Html => OutputFormat::Html,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let raw = read_input(cli.input.as_deref())?;
    log::info!("Read {} bytes of response text", raw.len());

    let converter = Converter::new(build_options(cli));
    let result = converter.convert(&raw, &cli.title)?;

    if let Some(path) = cli.output.as_deref() {
        fs::write(path, &result.content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", result.content);
    }

    if let Some(stats) = result.stats.as_ref() {
        print_stats(stats);
    }

    Ok(())
}

fn build_options(cli: &Cli) -> ConvertOptions {
    let mut parse = ParseOptions::new();
    if !cli.keywords.is_empty() {
        parse = parse.with_section_keywords(cli.keywords.iter().cloned());
    }

    let row_policy = if cli.no_pad {
        RowPolicy::Clip
    } else {
        RowPolicy::ClipAndPad
    };
    let render = RenderOptions::new()
        .with_frontmatter(cli.frontmatter)
        .with_row_policy(row_policy);

    let json_format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    ConvertOptions::new()
        .with_parse_options(parse)
        .with_render_options(render)
        .with_format(cli.format.into())
        .with_json_format(json_format)
        .with_stats(cli.stats)
        .with_timestamp(cli.frontmatter)
}

fn read_input(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path),
        _ => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

fn print_stats(stats: &ConversionStats) {
    eprintln!("\n{}", "Statistics".cyan().bold());
    eprintln!("  Source lines:    {}", stats.source_lines);
    eprintln!("  Elements:        {}", stats.element_count());
    eprintln!("  Section labels:  {}", stats.section_label_count);
    eprintln!("  Paragraphs:      {}", stats.paragraph_count);
    eprintln!("  Blank lines:     {}", stats.blank_count);
    eprintln!(
        "  Tables:          {} ({} rows)",
        stats.table_count, stats.table_row_count
    );
    if stats.ragged_table_count > 0 {
        eprintln!(
            "  {} {} table(s) with uneven rows",
            "!".yellow().bold(),
            stats.ragged_table_count
        );
    }
    eprintln!("  Separator lines: {}", stats.separator_lines);
    eprintln!("  Dropped lines:   {}", stats.dropped_lines);
    eprintln!("  Words:           {}", stats.word_count);
}
