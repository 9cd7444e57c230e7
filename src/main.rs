use gravsim::{run, NewtonianGravity, Scenario, ScenarioConfig, SimulationError};
use gravsim::{bench_gravity, bench_step, write_csv};

use anyhow::{bail, Result};
use clap::Parser;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under the scenarios/ directory
    #[arg(short, default_value = "inner_planets.yaml")]
    file_name: String,

    /// Where to write the trajectory CSV
    #[arg(short, default_value = "trajectory.csv")]
    output: PathBuf,

    /// Run the micro benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let Scenario {
        settings,
        mut system,
    } = Scenario::build_scenario(scenario_cfg);

    println!(
        "running {} bodies for {} steps (dt = {} s, sampling every {} steps)",
        system.bodies.len(),
        settings.total_steps,
        settings.dt,
        settings.sample_interval
    );

    let gravity = NewtonianGravity;
    let (trajectory, halted) = match run(&mut system, &gravity, &settings) {
        Ok(trajectory) => (trajectory, None),
        // A mid-run coincidence still leaves the samples recorded so far
        // valid; write them out before reporting the failure.
        Err(SimulationError::DegenerateConfiguration {
            step,
            body_a,
            body_b,
            partial,
        }) => {
            let msg = format!("bodies {body_a} and {body_b} coincide exactly at step {step}");
            (partial, Some(msg))
        }
        Err(err) => return Err(err.into()),
    };

    println!(
        "recorded {} samples, writing {}",
        trajectory.len(),
        args.output.display()
    );
    let out = BufWriter::new(File::create(&args.output)?);
    write_csv(&trajectory, out)?;

    if let Some(msg) = halted {
        bail!("run halted early: {msg}");
    }

    Ok(())
}
