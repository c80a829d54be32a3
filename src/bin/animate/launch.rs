use std::io;

use clap::Parser;
use projectile_sim::core::animation::AnimationSettings;
use projectile_sim::core::constants::FRAME_INTERVAL_MS;
use projectile_sim::core::error::SimResult;
use projectile_sim::core::kinematics::LaunchConfig;
use projectile_sim::core::planet::Planet;
use projectile_sim::core::report::{OutputFormat, RunReport, write_report};
use projectile_sim::core::session::{Console, LaunchArgs, WELCOME};

#[derive(Parser, Debug)]
#[command(name = "animate")]
#[command(version, about = "Animate a projectile launch", long_about = None)]
struct Cli {
    #[command(flatten)]
    launch: LaunchArgs,

    /// Animation time step (ms)
    #[arg(long, default_value_t = FRAME_INTERVAL_MS)]
    step_ms: u64,
}

pub(crate) struct Launch {
    pub(crate) planet: Planet,
    pub(crate) config: LaunchConfig,
    pub(crate) settings: AnimationSettings,
}

/// Takes the launch from flags, or asks for it once on the console. Stats
/// are printed only for the console path; flag callers already have them.
/// `Ok(None)` when the user backs out of the menu.
pub(crate) fn resolve_launch() -> SimResult<Option<Launch>> {
    let cli = Cli::parse();
    let settings = AnimationSettings::default().with_step_ms(cli.step_ms);

    let (planet, config) = match cli.launch.resolve()? {
        Some(launch) => launch,
        None => {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout());
            println!("{WELCOME}");
            let Some(planet) = console.choose_planet()? else {
                return Ok(None);
            };
            let config = console.read_launch(planet)?;
            write_report(console.output(), &RunReport::new(planet, config), OutputFormat::Table)?;
            (planet, config)
        }
    };

    Ok(Some(Launch {
        planet,
        config,
        settings,
    }))
}
