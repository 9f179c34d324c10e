// src/main.rs - Command-line probe for the kinematics component
use clap::{Parser, Subcommand};
use fiveaxis_kins::{
    create_kinematics, load_config, Component, Config, JointVector, KinematicsFlags, Pose,
    DEFAULT_COMPONENT_NAME,
};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "fiveaxis-kins", version, about = "Evaluate 5-axis head kinematics")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the configured pivot length
    #[arg(long)]
    pivot_length: Option<f64>,

    /// Override the configured tool length
    #[arg(long)]
    tool_length: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Joints (x y z tilt spin rotation u v w) to pose
    Forward {
        #[arg(num_args = 9, required = true, allow_negative_numbers = true)]
        joints: Vec<f64>,
    },
    /// Pose (x y z a b c u v w) to joints
    Inverse {
        #[arg(num_args = 9, required = true, allow_negative_numbers = true)]
        pose: Vec<f64>,
    },
    /// Home pose for the given joints
    Home {
        #[arg(num_args = 9, required = true, allow_negative_numbers = true)]
        joints: Vec<f64>,
    },
    /// Report which directions the kinematics solve
    Type,
}

#[derive(Serialize)]
struct HomeOutput {
    pose: Pose,
    forward_flags: u64,
    inverse_flags: u64,
}

fn nine(values: &[f64]) -> Result<[f64; 9], Box<dyn std::error::Error + Send + Sync + 'static>> {
    <[f64; 9]>::try_from(values).map_err(|_| format!("expected 9 values, got {}", values.len()).into())
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if let Some(pivot_length) = cli.pivot_length {
        config.kinematics.pivot_length = pivot_length;
    }
    if let Some(tool_length) = cli.tool_length {
        config.kinematics.tool_length = tool_length;
    }
    config.validate()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(config.logging.tracing_level().unwrap_or(tracing::Level::INFO))
        .with_writer(std::io::stderr)
        .init();

    let kins = create_kinematics(&config.kinematics.module).map_err(|e| {
        tracing::error!("Failed to create kinematics: {}", e);
        e
    })?;
    let component = Component::new(DEFAULT_COMPONENT_NAME, kins, config.kinematics.params())?;

    let output = match cli.command {
        Command::Forward { joints } => {
            let joints = JointVector::from(nine(&joints)?);
            serde_json::to_string_pretty(&component.forward(&joints)?)?
        }
        Command::Inverse { pose } => {
            let pose = Pose::from(nine(&pose)?);
            serde_json::to_string_pretty(&component.inverse(&pose)?)?
        }
        Command::Home { joints } => {
            let joints = JointVector::from(nine(&joints)?);
            let mut flags = KinematicsFlags::default();
            let pose = component.home(&joints, &mut flags)?;
            serde_json::to_string_pretty(&HomeOutput {
                pose,
                forward_flags: flags.forward,
                inverse_flags: flags.inverse,
            })?
        }
        Command::Type => serde_json::to_string(&component.kinematics_type())?,
    };
    println!("{}", output);

    Ok(())
}
