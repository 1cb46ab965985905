use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use resume_pad::{FileStorage, ResumeStore};

#[derive(Parser)]
#[command(name = "resumepad")]
#[command(version)]
#[command(about = "Inspect and manage locally stored resume data", long_about = None)]
struct Cli {
    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a summary of the stored resume and preferences
    Show,

    /// Select the active theme
    Theme {
        /// Theme key (e.g. calm, sunset, forest, mono)
        key: String,
    },

    /// Turn autosave on or off
    Autosave { state: Toggle },

    /// Replace the resume with the default template
    Reset,

    /// Export the resume as a dated JSON artifact
    Export {
        /// Output directory
        #[arg(long, short, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy)]
enum Toggle {
    On,
    Off,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let storage = match cli.data_dir {
        Some(dir) => FileStorage::new(dir),
        None => FileStorage::in_default_location(),
    };
    let mut store = ResumeStore::open(storage);

    match cli.command {
        Commands::Show => {
            let doc = store.document();
            let name = doc.profile.name.as_deref().unwrap_or("(unnamed)");
            println!("Name:       {}", name);
            println!("Education:  {} entries", doc.education.len());
            println!("Experience: {} entries", doc.experience.len());
            println!(
                "Projects:   {} entries",
                doc.projects.as_ref().map_or(0, Vec::len)
            );
            println!(
                "Awards:     {} entries",
                doc.awards.as_ref().map_or(0, Vec::len)
            );
            let theme = store.current_theme();
            println!("Theme:      {} ({})", theme.name, theme.key);
            println!(
                "Autosave:   {}",
                if store.autosave_enabled() { "on" } else { "off" }
            );
            match store.last_saved_at() {
                Some(at) => println!("Last saved: {}", at.to_rfc3339()),
                None => println!("Last saved: never (this session)"),
            }
        }
        Commands::Theme { key } => {
            let before = store.current_theme().key;
            store.set_theme(&key);
            let after = store.current_theme();
            if after.key == key {
                println!("Theme set to {} ({})", after.name, after.key);
            } else {
                let known: Vec<&str> = store.themes().iter().map(|t| t.key).collect();
                println!(
                    "Unknown theme '{}', keeping '{}'. Known themes: {}",
                    key,
                    before,
                    known.join(", ")
                );
            }
        }
        Commands::Autosave { state } => {
            let enabled = matches!(state, Toggle::On);
            store.set_autosave(enabled);
            println!("Autosave {}", if enabled { "enabled" } else { "disabled" });
        }
        Commands::Reset => {
            store.reset();
            println!("Resume reset to the default template");
        }
        Commands::Export { out } => {
            let path = store.export_json(&out)?;
            println!("Exported to {}", path.display());
        }
    }

    Ok(())
}
