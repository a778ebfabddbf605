//! Exercise form analyzer for recorded landmark streams.

use anyhow::{Context, Result};
use clap::Parser;
use exercise_form_analyzer::{
    app::{AppConfig, FormAnalysisApp},
    config::Config,
    exercise::Exercise,
};
use log::info;
use std::fs::File;
use std::io::{self, BufReader};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Frame file to analyze, one record per line (stdin when omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Exercise for frames that do not name one (squat, pushup, lunge, plank)
    #[arg(short, long)]
    exercise: Option<String>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Write a summary for every session after the last frame
    #[arg(short, long)]
    summary: bool,

    /// Leave joint angles out of the written results
    #[arg(long)]
    no_angles: bool,

    /// List supported exercises and exit
    #[arg(long)]
    list_exercises: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.list_exercises {
        for exercise in Exercise::ALL {
            println!("{:<8} {}", exercise.name(), exercise.description());
        }
        return Ok(());
    }

    let mut config = Config::load_or_default(args.config.as_deref());
    config.apply_overrides(args.exercise, args.summary, args.no_angles);
    config.validate()?;

    let mut app = FormAnalysisApp::new(AppConfig::from(&config));
    let stdout = io::stdout().lock();

    let frames = match &args.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open input file {path}"))?;
            app.run(BufReader::new(file), stdout)?
        }
        None => app.run(io::stdin().lock(), stdout)?,
    };

    info!("Analyzed {} frames in {} sessions", frames, app.session_count());

    Ok(())
}
