//! Gantry demo host CLI.
//!
//! Provides two modes of operation:
//! - `run`: Drive the simulated actuator through a full lifecycle and print
//!   the position easing toward the commanded target
//! - `info`: Print workspace crate versions and registered plugins

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use gantry_hwi::prelude::*;
use gantry_sim_actuator::PLUGIN_NAME;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Gantry hardware-interface demo host.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive the simulated actuator and print its position each cycle.
    Run {
        /// Hardware description TOML file; a built-in single-joint
        /// description is used when omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Number of read/write cycles to run.
        #[arg(short = 'n', long, default_value_t = 10)]
        cycles: u32,

        /// Commanded target position.
        #[arg(short, long, default_value_t = 10.0)]
        target: f64,

        /// Cycle period in milliseconds.
        #[arg(short, long, default_value_t = 100)]
        period_ms: u64,
    },

    /// Print crate and plugin information.
    Info,
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

/// Single position joint with short demo delays, used when no file is given.
fn default_description() -> HardwareInfo {
    HardwareInfo::new("gantry_lift_joint")
        .with_joint(JointDescriptor::position_joint("joint1"))
        .with_parameter("example_param_hw_start_duration_sec", "2.0")
        .with_parameter("example_param_hw_stop_duration_sec", "3.0")
        .with_parameter("example_param_hw_slowdown", "2.0")
}

fn run(config: Option<&str>, cycles: u32, target: f64, period_ms: u64) -> Result<(), HwError> {
    let info = match config {
        Some(path) => HardwareInfo::from_file(path)?,
        None => default_description(),
    };

    let mut registry = ActuatorRegistry::new();
    gantry_sim_actuator::register(&mut registry);
    let mut plugin = ManagedActuator::new(registry.instantiate(PLUGIN_NAME)?);
    log::info!("instantiated plugin '{}'", plugin.name());

    plugin.configure(&info)?;
    let states = plugin.export_state_interfaces();
    let commands = plugin.export_command_interfaces();
    log::info!(
        "exported {} state and {} command interfaces",
        states.len(),
        commands.len()
    );

    plugin.activate()?;
    for command in &commands {
        command.set(target);
    }

    let period = std::time::Duration::from_millis(period_ms);
    for cycle in 1..=cycles {
        plugin.read()?;
        plugin.write()?;
        for state in &states {
            println!(
                "cycle {cycle:3}: joint '{}' position {:.5}",
                state.joint(),
                state.get()
            );
        }
        std::thread::sleep(period);
    }

    plugin.deactivate()?;
    Ok(())
}

fn run_info() {
    println!("gantry v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  gantry-hwi          {}", env!("CARGO_PKG_VERSION"));
    println!("  gantry-sim-actuator {}", env!("CARGO_PKG_VERSION"));
    println!();

    let mut registry = ActuatorRegistry::new();
    gantry_sim_actuator::register(&mut registry);
    println!("plugins:");
    for name in registry.type_names() {
        println!("  {name}");
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Run {
            config,
            cycles,
            target,
            period_ms,
        }) => run(config.as_deref(), cycles, target, period_ms),
        Some(Commands::Info) => {
            run_info();
            Ok(())
        }
        None => run(None, 10, 10.0, 100),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
