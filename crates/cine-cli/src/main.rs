//! `cinecraft` binary: drive the planning pipeline from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use cine_interpreter::{interpret, recommend, SAMPLE_COMMANDS};
use cine_models::ShotPlan;
use cine_simulation::{analyze, default_simulation, generate_path, position_at_progress};
use cine_store::{DocumentStore, ShotPlanStore, SimulationDataService, StoreConfig};

#[derive(Parser, Debug)]
#[command(
    name = "cinecraft",
    version,
    about = "Rule-based cinematography planning from natural-language commands"
)]
struct Cli {
    /// Emit machine-readable JSON instead of a readable summary
    #[arg(long, global = true)]
    json: bool,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interpret a command into a full shot plan
    Plan {
        /// Natural-language scene description
        command: String,
    },
    /// Suggest alternative techniques for a command's plan
    Recommend { command: String },
    /// Derive the 3D camera path for a command's plan
    Path {
        command: String,
        /// Sample the camera position at this playback progress (0 to 1)
        #[arg(long)]
        at: Option<f64>,
    },
    /// Analyze the 2D composition for a command's plan
    Compose { command: String },
    /// Build the default 3D scene simulation for a command's plan
    Simulate { command: String },
    /// Print the built-in sample commands
    Samples,
    /// Run the full store + persistence pipeline on one command
    Demo {
        /// Command to run; defaults to the first built-in sample
        command: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    match cli.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }

    match cli.command {
        Command::Plan { command } => {
            let plan = interpret(&command);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan(&plan);
            }
        }
        Command::Recommend { command } => {
            let plan = interpret(&command);
            let recommendations = recommend(&plan);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&recommendations)?);
            } else {
                for rec in &recommendations {
                    println!("[{}] {}", rec.kind, rec.title);
                    println!("    {}", rec.description);
                    println!("    Benefit: {}", rec.benefit);
                }
            }
        }
        Command::Path { command, at } => {
            let plan = interpret(&command);
            let path = generate_path(&plan);
            if let Some(progress) = at {
                let position = position_at_progress(&path, progress);
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&position)?);
                } else {
                    println!(
                        "{} at t={progress}: ({:.3}, {:.3}, {:.3})",
                        path.movement_type, position.x, position.y, position.z
                    );
                }
            } else if cli.json {
                println!("{}", serde_json::to_string_pretty(&path)?);
            } else {
                println!(
                    "{} {} ({}), {} samples over {}s",
                    path.speed,
                    path.movement_type,
                    path.direction,
                    path.path_points.len(),
                    path.duration
                );
            }
        }
        Command::Compose { command } => {
            let plan = interpret(&command);
            let composition = analyze(&plan);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&composition)?);
            } else {
                println!(
                    "Subject at ({:.2}, {:.2}); key {}, fill {}{}",
                    composition.subject_position.x,
                    composition.subject_position.y,
                    composition.key_light_direction,
                    composition.fill_light_direction,
                    composition
                        .rim_light_direction
                        .map(|rim| format!(", rim {rim}"))
                        .unwrap_or_default()
                );
                for suggestion in &composition.suggestions {
                    let mark = if suggestion.applied { "applied" } else { "consider" };
                    println!("  [{mark}] {}: {}", suggestion.title, suggestion.description);
                }
            }
        }
        Command::Simulate { command } => {
            let plan = interpret(&command);
            let simulation = default_simulation(&plan);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&simulation)?);
            } else {
                println!(
                    "{} environment, camera at ({}, {}, {}), fov {}",
                    simulation.environment_type,
                    simulation.camera_position.x,
                    simulation.camera_position.y,
                    simulation.camera_position.z,
                    simulation.camera_fov
                );
            }
        }
        Command::Samples => {
            for sample in SAMPLE_COMMANDS {
                println!("{sample}");
            }
        }
        Command::Demo { command } => {
            let command = command.unwrap_or_else(|| SAMPLE_COMMANDS[0].to_string());
            run_demo(&command, cli.json).await?;
        }
    }

    Ok(())
}

/// Exercise the whole pipeline: store, generators, persistence service.
async fn run_demo(command: &str, json: bool) -> Result<()> {
    let store = ShotPlanStore::new(StoreConfig::from_env());
    store.hydrate().await?;

    info!(command, "executing command");
    let plan = store.execute_command(command).await?;

    let service = SimulationDataService::new(DocumentStore::in_memory());
    let (path, composition, simulation) = service.load_all(&plan).await;
    service.save_camera_path(&path).await?;
    service.save_composition(&composition).await?;
    service.save_simulation(&simulation).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        println!("{}", serde_json::to_string_pretty(&path)?);
        println!("{}", serde_json::to_string_pretty(&composition)?);
    } else {
        print_plan(&plan);
        println!();
        println!(
            "Camera path: {} {} over {} points",
            path.speed,
            path.movement_type,
            path.path_points.len()
        );
        println!(
            "Composition: subject ({:.2}, {:.2}), {} leading lines",
            composition.subject_position.x,
            composition.subject_position.y,
            composition.leading_lines_points.len()
        );
        println!("Environment: {}", simulation.environment_type);
        for recommendation in store.recommendations().await {
            println!("Tip [{}]: {}", recommendation.kind, recommendation.title);
        }
    }

    store.flush().await?;
    Ok(())
}

fn print_plan(plan: &ShotPlan) {
    println!("{}", plan.shot_type);
    println!(
        "  Scene:    {} - {} ({}{})",
        plan.scene_type,
        plan.location,
        plan.time_of_day,
        plan.weather
            .as_deref()
            .map(|w| format!(", {w}"))
            .unwrap_or_default()
    );
    println!(
        "  Camera:   {} {} @ {}, {} framing, {} movement",
        plan.camera.focal_length,
        plan.camera.lens,
        plan.camera.aperture,
        plan.camera.framing,
        plan.camera.movement
    );
    println!(
        "  Lighting: {} ({} contrast, {})",
        plan.lighting.style, plan.lighting.contrast, plan.lighting.color_temperature
    );
    println!("  Mood:     {} / {}", plan.mood, plan.cinematic_style);
    println!("  Palette:  {}", plan.color_palette.join(" "));
    println!("  Duration: {}", plan.duration);
    println!();
    println!("{}", plan.description);
}
