use std::path::PathBuf;
use std::process::Command;

use crate::core::error::{SimError, SimResult};
use crate::core::report::RunReport;

pub const VIEWER_BIN: &str = "animate";

/// The viewer is installed next to the console binary.
pub fn viewer_path() -> SimResult<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe.with_file_name(format!("{VIEWER_BIN}{}", std::env::consts::EXE_SUFFIX)))
}

/// Flags that make the viewer replay exactly this launch.
pub fn viewer_args(report: &RunReport, step_ms: u64) -> Vec<String> {
    let config = &report.config;
    let mut args = vec![
        format!("--planet={}", report.planet),
        format!("--speed={}", config.speed_mps),
        format!("--angle={}", config.angle_deg),
    ];
    if report.planet.gravity_mps2().is_none() {
        args.push(format!("--gravity={}", config.gravity_mps2));
    }
    if report.planet.has_wind() {
        args.push(format!("--wind={}", config.wind_mps));
    }
    args.push(format!("--step-ms={step_ms}"));
    args
}

/// Opens the animation window and blocks until the user closes it.
pub fn show_in_viewer(report: &RunReport, step_ms: u64) -> SimResult<()> {
    let path = viewer_path()?;
    let args = viewer_args(report, step_ms);
    tracing::debug!(path = %path.display(), ?args, "starting viewer");

    let status = Command::new(&path)
        .args(&args)
        .status()
        .map_err(|source| SimError::Viewer {
            path: path.clone(),
            source,
        })?;
    if !status.success() {
        tracing::warn!(%status, "viewer exited with an error");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::core::constants::FRAME_INTERVAL_MS;
    use crate::core::kinematics::LaunchConfig;
    use crate::core::planet::Planet;
    use crate::core::session::LaunchArgs;

    #[derive(Parser)]
    struct ViewerCli {
        #[command(flatten)]
        launch: LaunchArgs,

        #[arg(long)]
        step_ms: u64,
    }

    fn report(planet: Planet, gravity: f64, wind: f64) -> RunReport {
        let config = LaunchConfig::new(17.5, 62.0, gravity, wind).expect("valid config");
        RunReport::new(planet, config)
    }

    fn parse(args: &[String]) -> ViewerCli {
        let argv = std::iter::once(VIEWER_BIN.to_string()).chain(args.iter().cloned());
        ViewerCli::try_parse_from(argv).expect("viewer accepts its own flags")
    }

    #[test]
    fn fixed_planet_passes_no_gravity_or_wind() {
        let args = viewer_args(&report(Planet::Mars, 3.71, 0.0), FRAME_INTERVAL_MS);

        assert_eq!(
            args,
            ["--planet=mars", "--speed=17.5", "--angle=62", "--step-ms=10"]
        );
    }

    #[test]
    fn custom_planet_passes_gravity_and_wind() {
        let args = viewer_args(&report(Planet::Custom, 4.2, 1.5), 20);

        assert!(args.contains(&"--gravity=4.2".to_string()));
        assert!(args.contains(&"--wind=1.5".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("--step-ms=20"));
    }

    #[test]
    fn args_resolve_back_to_the_same_launch() {
        let cases = [
            report(Planet::Earth, 9.8, -3.25),
            report(Planet::Custom, 0.123456789, -0.1),
            report(Planet::Jupiter, 24.79, 0.0),
        ];
        for original in cases {
            let cli = parse(&viewer_args(&original, 15));
            let (planet, config) = cli
                .launch
                .resolve()
                .expect("resolve")
                .expect("flags describe a launch");

            assert_eq!(planet, original.planet);
            assert_eq!(config, original.config);
            assert_eq!(cli.step_ms, 15);
        }
    }
}
