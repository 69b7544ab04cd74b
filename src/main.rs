use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use rs_joint_trajectory::manipulator::Manipulator;
use rs_joint_trajectory::recorder::DatRecorder;
use rs_joint_trajectory::rig::JointId::{Arm, Body, Tool};
use rs_joint_trajectory::rig::Rig;
use rs_joint_trajectory::timing::steps_for_duration;
use rs_joint_trajectory::trajectory::MoveRequest;

/// Records the classic six joint demonstration sequence as an angle per step
/// table.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Output table
    #[arg(short, long, default_value = "Kuka.dat")]
    output: PathBuf,

    /// Duration of each move, seconds
    #[arg(short, long, default_value_t = 1.0)]
    duration: f64,

    /// Rig definition file (JSON); the builtin Kuka fleet when omitted
    #[arg(short, long)]
    rig: Option<PathBuf>,
}

const SHARPNESS: f64 = 1.0;

fn main() -> Result<()> {
    let args = Args::parse();

    let rig = match &args.rig {
        Some(path) => Rig::from_json_file(path)
            .with_context(|| format!("reading rig definition {}", path.display()))?,
        None => Rig::kuka(),
    };

    let recorder = DatRecorder::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut manipulator = Manipulator::new(rig, Box::new(recorder))?;

    // Run the whole sequence, but flush whatever was recorded even when a
    // later move fails to write.
    let outcome = run_sequence(&mut manipulator, steps_for_duration(args.duration));
    let closed = manipulator.close();
    outcome?;
    closed?;

    println!("Recorded {}", args.output.display());
    Ok(())
}

fn run_sequence(manipulator: &mut Manipulator, steps: i32) -> Result<()> {
    manipulator.move_base(60.0, SHARPNESS, steps)?;
    manipulator.move_joints(&[
        MoveRequest { joint: Body, delta_theta: 90.0, sharpness: SHARPNESS, steps },
        MoveRequest { joint: Arm, delta_theta: -90.0, sharpness: SHARPNESS, steps },
    ])?;
    manipulator.move_joints(&[
        MoveRequest { joint: Body, delta_theta: -45.0, sharpness: SHARPNESS, steps },
        MoveRequest { joint: Arm, delta_theta: 90.0, sharpness: SHARPNESS, steps },
        MoveRequest { joint: Tool, delta_theta: -45.0, sharpness: SHARPNESS, steps },
    ])?;
    manipulator.move_joints(&[
        MoveRequest { joint: Body, delta_theta: -45.0, sharpness: SHARPNESS, steps },
        MoveRequest { joint: Tool, delta_theta: 45.0, sharpness: SHARPNESS, steps },
    ])?;
    manipulator.move_base(-60.0, SHARPNESS, steps)?;
    Ok(())
}
