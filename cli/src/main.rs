//! qpaper CLI - question bank to question paper tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use qpaper::render::{to_json, JsonFormat, TextPreviewOptions};
use qpaper::{
    ExtractOptions, LayoutOptions, PageSelection, Pipeline, SegmentOptions, Selection, Unit,
};

#[derive(Parser)]
#[command(name = "qpaper")]
#[command(version)]
#[command(about = "Turn a question bank into a printable question paper", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that reads a question bank.
#[derive(Args)]
struct InputArgs {
    /// Question bank (PDF or UTF-8 text)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Page range to read from a PDF (e.g., "1-10", "1,3,5")
    #[arg(long)]
    pages: Option<String>,

    /// Extra unit keyword besides UNIT, SECTION and PART (repeatable)
    #[arg(long = "keyword", value_name = "WORD")]
    keywords: Vec<String>,

    /// Fail on the first page that cannot be read
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the text extracted from a question bank
    Text {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List detected units and questions
    Units {
        #[command(flatten)]
        input: InputArgs,

        /// Output JSON instead of a listing
        #[arg(long)]
        json: bool,

        /// Show the numbering pattern chosen for each unit
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write a selection file listing every detected question
    Template {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Preview the paper for a selection
    Preview {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        paper: PaperArgs,

        /// Render Markdown instead of paginated text
        #[arg(long)]
        markdown: bool,
    },

    /// Generate the question paper PDF
    #[command(alias = "gen")]
    Generate {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        paper: PaperArgs,

        /// Output PDF file
        #[arg(short, long, value_name = "FILE", default_value = "Question_Paper.pdf")]
        output: PathBuf,
    },

    /// Show version information
    Version,
}

/// Options for building a paper from a selection.
#[derive(Args)]
struct PaperArgs {
    /// Selection file written by `qpaper template` and edited by hand
    #[arg(short, long, value_name = "FILE")]
    selection: PathBuf,

    /// Paper title
    #[arg(long, default_value = "Question Paper")]
    title: String,

    /// Page size
    #[arg(long, value_enum, default_value = "a4")]
    page_size: PageSize,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PageSize {
    /// ISO A4 (210 x 297 mm)
    A4,
    /// US Letter (8.5 x 11 in)
    Letter,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Text { input, output } => cmd_text(&input, output.as_deref()),
        Commands::Units {
            input,
            json,
            verbose,
        } => cmd_units(&input, json, verbose),
        Commands::Template { input, output } => cmd_template(&input, output.as_deref()),
        Commands::Preview {
            input,
            paper,
            markdown,
        } => cmd_preview(&input, &paper, markdown),
        Commands::Generate {
            input,
            paper,
            output,
        } => cmd_generate(&input, &paper, &output),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_pipeline(input: &InputArgs) -> Result<Pipeline, Box<dyn std::error::Error>> {
    let pages = match input.pages.as_deref() {
        Some(p) => PageSelection::parse(p)?,
        None => PageSelection::All,
    };

    let mut extract_options = ExtractOptions::new().with_pages(pages);
    if !input.strict {
        // Skip unreadable pages rather than losing the whole bank
        extract_options = extract_options.lenient();
    }

    let pipeline = Pipeline::new()
        .with_extract_options(extract_options)
        .with_segment_options(SegmentOptions::new().with_keywords(input.keywords.iter().cloned()))?;
    Ok(pipeline)
}

fn build_paper_pipeline(
    input: &InputArgs,
    paper: &PaperArgs,
) -> Result<Pipeline, Box<dyn std::error::Error>> {
    let mut layout = LayoutOptions::new().with_title(paper.title.clone());
    if paper.page_size == PageSize::Letter {
        layout = layout.letter();
    }
    Ok(build_pipeline(input)?.with_layout_options(layout)?)
}

fn load_selection(path: &Path) -> Result<Selection, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    let selection: Selection = serde_json::from_str(&json)?;
    log::debug!(
        "Loaded {} with {} selected questions",
        path.display(),
        selection.selected_count()
    );
    Ok(selection)
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_text(input: &InputArgs, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = build_pipeline(input)?;
    let text = pipeline.text_from_path(&input.input)?;
    write_or_print(output, &text)
}

fn cmd_units(input: &InputArgs, json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = build_pipeline(input)?;
    let text = pipeline.text_from_path(&input.input)?;
    let units = pipeline.units_from_text(&text)?;

    if json {
        println!("{}", to_json(&units, JsonFormat::Pretty)?);
        return Ok(());
    }

    println!(
        "{} {} units/sections detected",
        "✓".green().bold(),
        units.len()
    );

    let reports = if verbose {
        pipeline.segmenter().segment_detailed(&text)
    } else {
        Vec::new()
    };

    for (u, unit) in units.iter().enumerate() {
        println!();
        print!("{} {}", format!("[{}]", u).dimmed(), unit.name.cyan().bold());
        if let Some(report) = reports.get(u) {
            print!("  {}", format!("({} pattern)", report.pattern).dimmed());
        }
        println!();

        if unit.is_empty() {
            println!("  {}", "no questions detected".yellow());
        }
        for (q, question) in unit.questions.iter().enumerate() {
            println!("  {} {}", format!("{}.{}", u, q).dimmed(), question);
        }
    }

    Ok(())
}

fn cmd_template(input: &InputArgs, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = build_pipeline(input)?;
    let units: Vec<Unit> = pipeline.units_from_path(&input.input)?;
    let template = Selection::template(&units);
    write_or_print(output, &to_json(&template, JsonFormat::Pretty)?)
}

fn cmd_preview(
    input: &InputArgs,
    paper_args: &PaperArgs,
    markdown: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = build_paper_pipeline(input, paper_args)?;
    let units = pipeline.units_from_path(&input.input)?;
    let selection = load_selection(&paper_args.selection)?;
    let paper = pipeline.paper(&units, &selection)?;

    if markdown {
        println!("{}", paper.to_markdown());
    } else {
        println!("{}", paper.to_text(&TextPreviewOptions::default()));
    }
    Ok(())
}

fn cmd_generate(
    input: &InputArgs,
    paper_args: &PaperArgs,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let paper = with_spinner(&spinner, |spinner| {
        spinner.set_message("Reading question bank...");
        let pipeline = build_paper_pipeline(input, paper_args)?;
        let units = pipeline.units_from_path(&input.input)?;

        spinner.set_message("Applying selection...");
        let selection = load_selection(&paper_args.selection)?;
        let paper = pipeline.paper(&units, &selection)?;

        spinner.set_message("Writing PDF...");
        fs::write(output, paper.to_pdf()?)?;
        Ok(paper)
    })?;

    let questions: usize = paper.units.iter().map(|u| u.questions.len()).sum();
    println!("{}", "Question paper generated".green().bold());
    println!("  {} {} questions", "├─".dimmed(), questions);
    println!("  {} {} total marks", "├─".dimmed(), paper.total);
    println!("  {} {} pages", "├─".dimmed(), paper.page_count());
    println!("  {} {}", "└─".dimmed(), output.display());

    Ok(())
}

/// Run `step`, clearing the spinner whether it succeeds or fails.
fn with_spinner<T>(
    spinner: &ProgressBar,
    step: impl FnOnce(&ProgressBar) -> Result<T, Box<dyn std::error::Error>>,
) -> Result<T, Box<dyn std::error::Error>> {
    let result = step(spinner);
    spinner.finish_and_clear();
    result
}

fn cmd_version() {
    println!("{} {}", "qpaper".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Question bank to question paper tool");
    println!();
    println!("License: MIT");
}
