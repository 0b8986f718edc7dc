use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

use konspekt_core::{
    ArtifactAssembler, GenAiClient, Provider, clean, format_flashcards_readable,
    format_notes_readable, format_quiz_readable, get_cache_dir, get_cleaned_path,
    get_flashcards_path, get_notes_path, get_quiz_path, load_flashcards, load_notes, load_quiz,
    load_transcript, save_json, save_text,
};

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliProvider {
    #[default]
    Gemini,
    Openai,
    Grok,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Gemini => Provider::Gemini,
            CliProvider::Openai => Provider::Openai,
            CliProvider::Grok => Provider::Grok,
        }
    }
}

#[derive(Parser)]
#[command(name = "konspekt")]
#[command(about = "Turn a lecture transcript into study notes, flashcards, and a quiz")]
struct Cli {
    /// Path to a transcript text file
    transcript: PathBuf,

    /// AI provider for generation
    #[arg(short, long, default_value = "gemini")]
    provider: CliProvider,

    /// Force re-processing even if cached artifacts exist
    #[arg(short, long)]
    force: bool,

    /// Skip quiz generation
    #[arg(long)]
    skip_quiz: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let provider: Provider = cli.provider.into();

    // Validate API key early
    if let Err(e) = provider.validate_api_key() {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
    let client = GenAiClient::new(&provider)?;
    let assembler = ArtifactAssembler::new(&client);

    // Setup cache directory
    let cache_dir = get_cache_dir(&cli.transcript.to_string_lossy());
    fs::create_dir_all(&cache_dir).await?;

    println!(
        "\n{}  {}\n",
        style("konspekt").cyan().bold(),
        style("Lecture Study Kit").dim()
    );

    // Step 1: Load and clean the transcript
    let spinner = create_spinner("Cleaning transcript...");
    let transcript = load_transcript(&cli.transcript).await?;
    let cleaned = clean(&transcript);
    save_text(&cleaned, &get_cleaned_path(&cache_dir)).await?;
    spinner.finish_with_message(format!(
        "{} Cleaned {}",
        style("✓").green().bold(),
        style(format!("({} words)", cleaned.split_whitespace().count())).dim()
    ));

    // Step 2: Notes package (check cache)
    let notes_path = get_notes_path(&cache_dir, &provider);
    let notes = if !cli.force && notes_path.exists() {
        println!(
            "{} Notes {}",
            style("✓").green().bold(),
            style("(cached)").dim()
        );
        load_notes(&notes_path).await?
    } else {
        let spinner = create_spinner("Generating notes and summary...");
        let notes = assembler.study_notes(&cleaned).await?;
        save_json(&notes, &notes_path).await?;
        spinner.finish_with_message(format!(
            "{} Notes: {}",
            style("✓").green().bold(),
            style(&notes.topic).dim()
        ));
        notes
    };

    // Step 3: Flashcards (check cache)
    let flashcards_path = get_flashcards_path(&cache_dir, &provider);
    let flashcards = if !cli.force && flashcards_path.exists() {
        println!(
            "{} Flashcards {}",
            style("✓").green().bold(),
            style("(cached)").dim()
        );
        load_flashcards(&flashcards_path).await?
    } else {
        let spinner = create_spinner("Designing flashcards...");
        let cards = assembler.flashcards(&notes).await;
        save_json(&cards, &flashcards_path).await?;
        spinner.finish_with_message(format!(
            "{} Flashcards {}",
            style("✓").green().bold(),
            style(format!("({})", cards.len())).dim()
        ));
        cards
    };

    // Step 4: Quiz (check cache)
    let quiz = if cli.skip_quiz {
        None
    } else {
        let quiz_path = get_quiz_path(&cache_dir, &provider);
        let quiz = if !cli.force && quiz_path.exists() {
            println!(
                "{} Quiz {}",
                style("✓").green().bold(),
                style("(cached)").dim()
            );
            load_quiz(&quiz_path).await?
        } else {
            let spinner = create_spinner("Generating quiz...");
            let quiz = assembler.quiz(&notes).await;
            save_json(&quiz, &quiz_path).await?;
            if quiz.is_ok() {
                spinner.finish_with_message(format!(
                    "{} Quiz {}",
                    style("✓").green().bold(),
                    style(format!("({} questions)", quiz.questions.len())).dim()
                ));
            } else {
                spinner.finish_with_message(format!(
                    "{} Quiz not generated: {}",
                    style("!").yellow().bold(),
                    style(quiz.status.as_str()).yellow()
                ));
            }
            quiz
        };
        Some(quiz)
    };

    // Render the full package
    println!("\n{}", format_notes_readable(&notes));
    println!("{}", format_flashcards_readable(&flashcards));
    if let Some(quiz) = &quiz {
        println!("{}", format_quiz_readable(quiz));
    }

    println!(
        "{} Artifacts cached in {}",
        style("✓").green().bold(),
        style(cache_dir.display()).dim()
    );

    Ok(())
}
