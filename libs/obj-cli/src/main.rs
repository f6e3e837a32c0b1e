//! objxform
//!
//! Loads an OBJ file, turns closed `l` outlines into faces, applies
//! scale → translate → rotate and writes the result.
//!
//! ```text
//! objxform --input model.obj --scale 2 --translate 1 0 -3 --rotate 0 1.5708 0
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use config::constants::{DEFAULT_OUTPUT_PATH, DEFAULT_SCALE, FLOAT_PRECISION};
use config::defaults::PipelineDefaults;
use glam::DVec3;
use obj_mesh::{run_job, FaceErrorPolicy, Job, JobSummary, TransformMode};
use tracing_subscriber::EnvFilter;

/// Reposition a Wavefront OBJ mesh
#[derive(Debug, Parser)]
#[command(name = "objxform")]
#[command(about = "Scale, translate and rotate a Wavefront OBJ mesh", long_about = None)]
#[command(version)]
struct Cli {
    /// Input file (e.g. model.obj)
    #[arg(long, value_name = "PATH")]
    input: PathBuf,

    /// Output file, created or overwritten
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Uniform scale factor
    #[arg(long, value_name = "FACTOR", default_value_t = DEFAULT_SCALE, allow_negative_numbers = true)]
    scale: f64,

    /// Offset along X, Y and Z
    #[arg(
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true
    )]
    translate: Option<Vec<f64>>,

    /// Rotation about X, Y and Z in radians
    #[arg(
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true
    )]
    rotate: Option<Vec<f64>>,

    /// When the transforms are applied to vertex data
    #[arg(long, value_enum, default_value_t = Mode::Immediate)]
    mode: Mode,

    /// Keep `l` segments as lines instead of rebuilding faces
    #[arg(long)]
    no_reconstruct: bool,

    /// Fail on the first malformed face instead of skipping it
    #[arg(long)]
    strict_faces: bool,

    /// Also write line segments to the output
    #[arg(long)]
    include_lines: bool,

    /// Digits after the decimal point in the output
    #[arg(long, value_name = "DIGITS", default_value_t = FLOAT_PRECISION)]
    precision: usize,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Rewrite vertices as each operation runs
    Immediate,
    /// Compose operations and apply them while writing
    Deferred,
}

impl From<Mode> for TransformMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Immediate => TransformMode::Immediate,
            Mode::Deferred => TransformMode::Deferred,
        }
    }
}

impl Cli {
    fn into_job(self) -> Result<Job> {
        let defaults = PipelineDefaults::new(self.precision, self.output.to_string_lossy())
            .context("invalid output settings")?;

        let mut job = Job::new(self.input);
        job.output = self.output;
        job.scale = DVec3::splat(self.scale);
        job.translate = triple("translate", self.translate.as_deref())?;
        job.rotate = triple("rotate", self.rotate.as_deref())?;
        job.reconstruct_lines = !self.no_reconstruct;
        job.parse.mode = self.mode.into();
        if self.strict_faces {
            job.parse.face_errors = FaceErrorPolicy::Abort;
        }
        job.write.precision = defaults.precision;
        job.write.include_lines = self.include_lines;
        Ok(job)
    }
}

fn triple(flag: &str, values: Option<&[f64]>) -> Result<DVec3> {
    match values {
        None => Ok(DVec3::ZERO),
        Some(&[x, y, z]) => Ok(DVec3::new(x, y, z)),
        Some(other) => bail!("--{flag} expects 3 values, got {}", other.len()),
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report(job: &Job, summary: &JobSummary) {
    for op in &summary.applied {
        match *op {
            "scale" => println!("Scaled model by factor: {:.2}", job.scale.x),
            "translate" => println!(
                "Translated model by: {:.2}, {:.2}, {:.2}",
                job.translate.x, job.translate.y, job.translate.z
            ),
            "rotate" => println!(
                "Rotated model by: {:.2}, {:.2}, {:.2} (radians)",
                job.rotate.x, job.rotate.y, job.rotate.z
            ),
            _ => {}
        }
    }
    if summary.faces_reconstructed > 0 {
        println!(
            "Reconstructed {} faces from line segments",
            summary.faces_reconstructed
        );
    }
    if summary.skipped_records > 0 {
        println!("Skipped {} malformed records", summary.skipped_records);
    }
    println!("Done. Parsed data written to {}", summary.output.display());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    let job = cli.into_job()?;
    let summary = run_job(&job)
        .with_context(|| format!("failed to process {}", job.input.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        report(&job, &summary);
    }
    Ok(())
}
