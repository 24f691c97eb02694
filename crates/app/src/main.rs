use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use shiftup_site_core::{
    DismissSource, FormData, OverlayKind, PartnerCategory, ScriptStep, Site, SiteConfig,
    UiCommand, View,
};
use tracing_subscriber::EnvFilter;

fn main() -> shiftup_site_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tour { config } => run_tour(config.as_deref()),
        Commands::Replay { script, config } => run_replay(&script, config.as_deref()),
        Commands::Content { collection } => run_content(collection),
    }
}

fn load_config(path: Option<&Path>) -> shiftup_site_core::Result<SiteConfig> {
    match path {
        Some(path) => {
            tracing::info!(?path, "loading configuration");
            SiteConfig::from_json_file(path)
        }
        None => Ok(SiteConfig::default()),
    }
}

fn run_tour(config: Option<&Path>) -> shiftup_site_core::Result<()> {
    let mut site = Site::new(load_config(config)?)?;
    let rotation = site.config().carousel.period_ms;
    tracing::info!("starting guided tour");

    let steps = [
        (UiCommand::OpenVideo, 1_000),
        (
            UiCommand::Dismiss {
                overlay: OverlayKind::Video,
                source: DismissSource::Escape,
            },
            rotation,
        ),
        (
            UiCommand::Navigate {
                view: View::Partner,
                anchor: None,
                content_id: None,
            },
            0,
        ),
        (
            UiCommand::OpenPartner {
                category: PartnerCategory::Sponsorship,
            },
            1_000,
        ),
        (
            UiCommand::Submit {
                overlay: OverlayKind::PartnerApplication,
                form: FormData::new()
                    .with("organisation", "Acme Foundation")
                    .with("email", "partnerships@acme.org")
                    .with("category", "scholarship"),
            },
            2_500,
        ),
        (
            UiCommand::Navigate {
                view: View::Blog,
                anchor: None,
                content_id: Some(3),
            },
            0,
        ),
    ];

    for (command, wait_ms) in steps {
        if let Err(err) = site.apply(command) {
            tracing::warn!(error = %err, "tour step rejected");
        }
        site.advance(wait_ms);
        print_json(&site.snapshot())?;
    }
    Ok(())
}

fn run_replay(script: &Path, config: Option<&Path>) -> shiftup_site_core::Result<()> {
    tracing::info!(?script, "replaying script");
    let raw = std::fs::read_to_string(script)?;
    let steps: Vec<ScriptStep> = serde_json::from_str(&raw)?;

    let mut site = Site::new(load_config(config)?)?;
    for snapshot in site.replay(&steps)? {
        print_json(&snapshot)?;
    }
    Ok(())
}

fn run_content(collection: Collection) -> shiftup_site_core::Result<()> {
    let site = Site::new(SiteConfig::default())?;
    let catalog = site.catalog();
    match collection {
        Collection::Blog => print_json(&catalog.blog_posts()),
        Collection::Faq => print_json(&catalog.faqs()),
        Collection::Programmes => print_json(&catalog.programmes()),
        Collection::Testimonials => print_json(&catalog.testimonials()),
        Collection::Team => print_json(&catalog.team()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> shiftup_site_core::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "ShiftUp Africa site controllers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Walk through a scripted visit and print a snapshot after each step.
    Tour {
        /// Optional JSON configuration overriding timings.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Replay a JSON array of timed UI commands.
    Replay {
        /// Path to the replay script.
        script: PathBuf,
        /// Optional JSON configuration overriding timings.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print one of the static content collections as JSON.
    Content {
        #[arg(value_enum)]
        collection: Collection,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Collection {
    Blog,
    Faq,
    Programmes,
    Testimonials,
    Team,
}
