use std::io::Read;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use bluster::config::Config;
use bluster::scoring;
use bluster::scoring::danger::DangerWeights;
use bluster::tts::gtts::GoogleTranslateSynthesizer;
use bluster::tts::SpeechSynthesizer;

/// Bluster: danger-versus-hype scoring for sensational news text.
///
/// Tells a barking headline from a biting one: keyword hits raise the
/// danger score, sensational framing lowers it, and the verdict comes with
/// a pre-authored Malayalam one-liner.
#[derive(Parser)]
#[command(name = "bluster", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze text (from the argument, or stdin when omitted)
    Analyze {
        /// The text to score
        text: Option<String>,

        /// Emit the full result as JSON instead of the terminal report
        #[arg(long)]
        json: bool,

        /// Seed the dialogue draw for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Synthesize arbitrary text to an mp3 file
    Speak {
        /// The text to narrate
        text: String,

        /// Output file path
        #[arg(long, default_value = "speech.mp3")]
        output: String,
    },

    /// Run the HTTP API (POST /analyze, GET /audio/*)
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bluster=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { text, json, seed } => {
            let input = match text {
                Some(t) => t,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let weights = DangerWeights::default();
            let result = match seed {
                Some(s) => {
                    let mut rng = StdRng::seed_from_u64(s);
                    scoring::analyze_with(&input, &weights, &mut rng)
                }
                None => scoring::analyze(&input),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                bluster::output::terminal::display_analysis(&input, &result);
            }
        }

        Commands::Speak { text, output } => {
            let config = Config::load()?;
            let synthesizer =
                GoogleTranslateSynthesizer::new(&config.tts_endpoint, &config.tts_lang);

            println!("Synthesizing {} chars to {output}...", text.chars().count());
            synthesizer.synthesize(&text, output.as_ref()).await?;
            println!("Done.");
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            use std::sync::Arc;

            let config = Config::load()?;
            let synthesizer: Arc<dyn SpeechSynthesizer> = Arc::new(
                GoogleTranslateSynthesizer::new(&config.tts_endpoint, &config.tts_lang),
            );

            bluster::web::run_server(config, synthesizer, port, &bind).await?;
        }
    }

    Ok(())
}
