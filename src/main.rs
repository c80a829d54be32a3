use std::io;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;

use projectile_sim::core::constants::FRAME_INTERVAL_MS;
use projectile_sim::core::error::SimResult;
use projectile_sim::core::report::{OutputFormat, RunReport};
use projectile_sim::core::run::{RunOptions, emit_run};
use projectile_sim::core::session::{Console, LaunchArgs, run_session};
use projectile_sim::core::viewer::show_in_viewer;
use projectile_sim::logging::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "projectile_sim")]
#[command(version, about = "2-D projectile motion simulator", long_about = None)]
struct Cli {
    #[command(flatten)]
    launch: LaunchArgs,

    /// Animation time step (ms)
    #[arg(long, default_value_t = FRAME_INTERVAL_MS)]
    step_ms: u64,

    /// Output format for stats and frames
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// Also print every animation frame until the projectile stops
    #[arg(long)]
    frames: bool,

    /// Save an SVG plot of the trajectory (timestamped name if PATH is omitted)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    plot: Option<Option<PathBuf>>,

    /// Menu mode only: print stats without opening the animation window
    #[arg(long)]
    no_window: bool,
}

impl Cli {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            output: self.output,
            frames: self.frames,
            step_ms: self.step_ms,
            plot: self.plot.clone(),
        }
    }
}

fn run() -> SimResult<()> {
    let cli = Cli::parse();
    let options = cli.run_options();

    if let Some((planet, config)) = cli.launch.resolve()? {
        let stdout = io::stdout();
        let report = RunReport::new(planet, config);
        return emit_run(&mut stdout.lock(), &options, &report, Local::now());
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let end = run_session(&mut console, |console, report| {
        emit_run(console.output(), &options, &report, Local::now())?;
        if cli.no_window {
            return Ok(());
        }
        show_in_viewer(&report, cli.step_ms)
    })?;
    tracing::debug!(?end, "session finished");
    Ok(())
}

fn main() {
    init_tracing("warn");
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
