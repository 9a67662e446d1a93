//! Tota - Language Tutor
//!
//! Command line front end for the flashcard and practice cores.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tota::config::{config_path, Config};
use tota::learn::{Category, DirectoryBundle, LearnController, ReviewState, SwipeDirection, VocabularyStore};
use tota::practice::{catalog, orchestrator, SessionSelection};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory holding the <language>-json.json vocabulary files
    #[arg(long)]
    vocab_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List languages with vocabulary available
    Languages,

    /// Print a language's cards in file order
    Cards {
        #[arg(short, long)]
        language: String,
        #[arg(short, long, default_value = "words")]
        category: Category,
    },

    /// Review shuffled flashcards interactively
    Review {
        #[arg(short, long)]
        language: Option<String>,
        #[arg(short, long, default_value = "words")]
        category: Category,
    },

    /// List practice languages, scenarios and voices
    Catalog,

    /// Show the token request a practice session would send
    Practice {
        #[arg(short, long)]
        language: Option<String>,
        #[arg(short, long)]
        scenario: Option<String>,
        #[arg(long)]
        voice: Option<String>,
    },

    /// Update the saved configuration (`--vocab-dir` is saved as well)
    Config {
        #[arg(short, long)]
        language: Option<String>,
        #[arg(short, long)]
        scenario: Option<String>,
        #[arg(long)]
        voice: Option<String>,
        #[arg(long)]
        sandbox_id: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config::load()?;

    // Setup logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase()))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🦜 Tota v{} starting...", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Languages => {
            let store = load_store(&args.vocab_dir, &config);
            if store.is_empty() {
                warn!("No vocabulary found");
            }
            for language in store.languages() {
                println!("{:<10} {:<12} {}", language.id, language.name, language.native_name);
            }
        }
        Command::Cards { language, category } => {
            let store = load_store(&args.vocab_dir, &config);
            for card in store.cards(&language, category) {
                println!(
                    "{} | {} | {}",
                    card.native_term, card.transliteration, card.english_term
                );
            }
        }
        Command::Review { language, category } => {
            let store = Arc::new(load_store(&args.vocab_dir, &config));
            let mut controller = LearnController::new(store);
            if let Some(id) = language {
                controller.select_language(&id)?;
            }
            controller.select_category(category);
            review(&mut controller)?;
        }
        Command::Catalog => print_catalog(),
        Command::Practice {
            language,
            scenario,
            voice,
        } => {
            let defaults = config.session_selection();
            let selection = SessionSelection::from_ids(
                language.as_deref().unwrap_or(defaults.language.id),
                scenario.as_deref().unwrap_or(defaults.scenario.id),
                voice.as_deref().unwrap_or(defaults.voice.id),
            )?;
            if config.sandbox_id.is_empty() {
                warn!("No sandbox_id configured");
            }
            println!("token source: {}", config.sandbox_id);
            for (key, value) in orchestrator::token_options(&selection).participant_attributes {
                println!("  {} = {}", key, value);
            }
        }
        Command::Config {
            language,
            scenario,
            voice,
            sandbox_id,
        } => {
            if let Some(dir) = &args.vocab_dir {
                config.vocabulary_dir = dir.to_string_lossy().to_string();
            }
            if let Some(id) = language {
                config.default_language = catalog::find_language(&id)?.id.to_string();
            }
            if let Some(id) = scenario {
                config.default_scenario = catalog::find_scenario(&id)?.id.to_string();
            }
            if let Some(id) = voice {
                config.default_voice = catalog::find_voice(&id)?.id.to_string();
            }
            if let Some(id) = sandbox_id {
                config.sandbox_id = id;
            }
            config.save()?;
            info!("💾 Saved configuration to {:?}", config_path());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn load_store(vocab_dir: &Option<PathBuf>, config: &Config) -> VocabularyStore {
    let root = vocab_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.vocabulary_dir));
    info!("📂 Loading vocabulary from {:?}", root);
    VocabularyStore::load_all(&DirectoryBundle::new(root))
}

fn review(controller: &mut LearnController) -> Result<()> {
    let Some(language) = controller.language().cloned() else {
        bail!("No vocabulary available to review");
    };
    println!(
        "Reviewing {} {} ({} cards). l/r to swipe, s to start over, q to quit.",
        language.name,
        controller.category(),
        controller.cursor().len()
    );

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        match controller.state() {
            ReviewState::Active(index) => {
                if let Some(card) = controller.top() {
                    println!(
                        "\n[{}/{}] {}\n        {}",
                        index + 1,
                        controller.cursor().len(),
                        card.native_term,
                        card.transliteration
                    );
                }
            }
            ReviewState::Exhausted => println!("\nYou've reviewed all cards. s to start over, q to quit."),
        }
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        match line.trim() {
            "l" | "r" if controller.state() == ReviewState::Exhausted => {}
            "l" | "r" => {
                if let Some(card) = controller.top() {
                    println!("        = {}", card.english_term);
                }
                let direction = if line.trim() == "r" {
                    SwipeDirection::Right
                } else {
                    SwipeDirection::Left
                };
                controller.swipe(direction)?;
            }
            "s" => controller.start_over(),
            "q" => break,
            other => println!("Unknown input '{}'", other),
        }
    }

    let tally = controller.cursor().tally();
    info!("Swiped {} left, {} right", tally.left, tally.right);
    Ok(())
}

fn print_catalog() {
    println!("Languages:");
    for language in catalog::LANGUAGES {
        println!("  {:<6} {:<10} {}", language.id, language.name, language.native_name);
    }
    println!("Scenarios:");
    for scenario in catalog::SCENARIOS {
        println!("  {:<14} {} - {}", scenario.id, scenario.name, scenario.description);
    }
    println!("Voices:");
    for voice in catalog::VOICES {
        println!("  {:<8} {:?}", voice.id, voice.gender);
    }
}
