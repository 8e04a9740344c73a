//! fitgen - Customized workout plan generator
//!
//! Asks an LLM for a plan when an API key is configured, otherwise builds
//! one from the built-in exercise catalog.

use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use fitgen::db::Database;
use fitgen::llm::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use fitgen::llm::{GeminiClient, WorkoutProvider};
use fitgen::params::{RawWorkoutRequest, validate};
use fitgen::prompt::{SYSTEM_PROMPT, format_user_prompt};
use fitgen::service::WorkoutService;
use fitgen::tui::App;

#[derive(Parser)]
#[command(name = "fitgen")]
#[command(author, version, about = "Customized workout plan generator")]
struct Cli {
    /// SQLite database path
    #[arg(long, global = true, env = "FITGEN_DB", default_value = "fitgen.db")]
    db: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open TUI dashboard
    Tui,

    /// Generate a workout plan
    Generate {
        #[command(flatten)]
        workout: WorkoutArgs,

        #[command(flatten)]
        llm: LlmArgs,

        /// Skip the LLM and use the rule-based generator
        #[arg(long)]
        offline: bool,

        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the prompts that would be sent to the LLM
    Prompt {
        #[command(flatten)]
        workout: WorkoutArgs,
    },

    /// List generated workouts
    History {
        /// Number of records to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct WorkoutArgs {
    /// Muscle group (chest, back, shoulders, arms, legs, core, fullbody); repeatable
    #[arg(short, long = "muscle", required = true)]
    muscles: Vec<String>,

    /// Intensity from 1 (beginner) to 5 (expert)
    #[arg(short, long, default_value = "3")]
    intensity: i64,

    /// Workout type (lifting, circuit, crossfit, hiit, calisthenics, stretching, combination)
    #[arg(short = 't', long = "type", default_value = "lifting")]
    workout_type: String,

    /// Goal (weightLoss, muscleBuild, endurance, strength, toning, flexibility, maintenance)
    #[arg(short, long, default_value = "maintenance")]
    goal: String,

    /// Duration in minutes
    #[arg(short, long, default_value = "45")]
    duration: String,
}

impl WorkoutArgs {
    fn to_request(&self) -> RawWorkoutRequest {
        RawWorkoutRequest {
            muscle_groups: self.muscles.clone(),
            intensity: self.intensity,
            workout_type: self.workout_type.clone(),
            goal: self.goal.clone(),
            duration: self.duration.clone(),
        }
    }
}

#[derive(Args)]
struct LlmArgs {
    /// Gemini API key (or set GEMINI_API_KEY env var)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model name
    #[arg(long, env = "FITGEN_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// API base URL
    #[arg(long, env = "FITGEN_LLM_URL", default_value = DEFAULT_BASE_URL)]
    llm_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "FITGEN_LLM_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

impl LlmArgs {
    fn provider(&self) -> Result<Option<Box<dyn WorkoutProvider>>> {
        let Some(key) = self.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
            return Ok(None);
        };
        let client = GeminiClient::new(&self.llm_url, &self.model, key, Duration::from_secs(self.timeout))?;
        Ok(Some(Box::new(client)))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate { workout, llm, offline, json }) => {
            let db = Database::open(&cli.db)?;
            let provider = if offline { None } else { llm.provider()? };
            let service = WorkoutService::new(db, provider, Duration::from_secs(llm.timeout));
            if !service.has_provider() {
                info!("Generating offline");
            }

            let response = service.generate(&workout.to_request()).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", response.content);
                if response.is_demo {
                    eprintln!("(rule-based demo workout)");
                }
            }
        }

        Some(Commands::Prompt { workout }) => {
            let params = validate(&workout.to_request())?;
            println!("{}", SYSTEM_PROMPT);
            println!("{:-<60}", "");
            println!("{}", format_user_prompt(&params));
        }

        Some(Commands::History { limit, json }) => {
            let service = WorkoutService::offline(Database::open(&cli.db)?);
            let history = service.history(limit)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&history)?);
                return Ok(());
            }
            println!("Recent workouts:");
            println!("{:-<80}", "");
            for w in &history {
                let p = &w.parameters;
                println!(
                    "{} | {:30} | {}/5 | {:15} | {:17} | {}",
                    w.timestamp.format("%Y-%m-%d %H:%M"),
                    p.muscle_groups_text(),
                    p.intensity,
                    p.workout_type.label(),
                    p.goal.label(),
                    if w.is_demo { "demo" } else { "AI" }
                );
            }
        }

        Some(Commands::Tui) | None => {
            // Default: show TUI
            let mut app = App::new(Database::open(&cli.db)?)?;
            app.run()?;
        }
    }

    Ok(())
}
