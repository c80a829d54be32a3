use std::io::{BufRead, Write};

use clap::Args;

use crate::core::error::{SimError, SimResult};
use crate::core::kinematics::LaunchConfig;
use crate::core::planet::Planet;
use crate::core::report::RunReport;

pub const WELCOME: &str = "Welcome to 2-D projectile motion simulator";

/// Line-oriented prompts over any reader/writer pair. Input errors are never
/// retried: a bad number ends the session.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt_line(&mut self, prompt: &str) -> SimResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SimError::UnexpectedEof);
        }
        Ok(line)
    }

    pub fn read_f64(&mut self, prompt: &str, label: &str) -> SimResult<f64> {
        let line = self.prompt_line(prompt)?;
        line.trim()
            .parse::<f64>()
            .map_err(|_| SimError::invalid_number(label, &line))
    }

    pub fn read_i64(&mut self, prompt: &str, label: &str) -> SimResult<i64> {
        let line = self.prompt_line(prompt)?;
        line.trim()
            .parse::<i64>()
            .map_err(|_| SimError::invalid_number(label, &line))
    }

    pub fn print_menu(&mut self) -> SimResult<()> {
        writeln!(self.output, "\nEnter one of the following options")?;
        for (idx, planet) in Planet::MENU.iter().enumerate() {
            writeln!(self.output, "{}. {}", idx + 1, planet)?;
        }
        Ok(())
    }

    /// Shows the menu until a listed option is picked. `Ok(None)` when the
    /// answer isn't a number at all.
    pub fn choose_planet(&mut self) -> SimResult<Option<Planet>> {
        loop {
            self.print_menu()?;
            let choice = match self.read_i64("Enter your choice number: ", "choice") {
                Ok(choice) => choice,
                Err(SimError::Io(err)) => return Err(SimError::Io(err)),
                Err(err) => {
                    tracing::debug!(%err, "menu input rejected");
                    writeln!(self.output, "Invalid input, exiting.")?;
                    return Ok(None);
                }
            };
            match Planet::from_menu_choice(choice) {
                Some(planet) => return Ok(Some(planet)),
                None => writeln!(self.output, "Invalid option. Try again.")?,
            }
        }
    }

    /// Prompts for whatever the chosen planet leaves open, then the launch itself.
    pub fn read_launch(&mut self, planet: Planet) -> SimResult<LaunchConfig> {
        let gravity_mps2 = match planet.gravity_mps2() {
            Some(g) => g,
            None => self.read_f64("Enter the acceleration due to gravity (m/s^2): ", "gravity")?,
        };
        let wind_mps = if planet.has_wind() {
            self.read_f64(
                "Enter wind speed (m/s), positive for right, negative for left, 0 for none: ",
                "wind speed",
            )?
        } else {
            0.0
        };

        writeln!(self.output, "The acceleration due to gravity is {gravity_mps2:?}")?;
        let speed_mps = self.read_f64("Enter the initial velocity of object (m/s): ", "velocity")?;
        let angle_deg = self.read_f64("Enter the angle of projection in degrees: ", "angle")?;

        LaunchConfig::new(speed_mps, angle_deg, gravity_mps2, wind_mps)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// User asked to stop after a run.
    Exited,
    /// Menu choice wasn't a number.
    InvalidMenuInput,
}

/// Runs the menu loop, handing each configured launch to `on_run`.
///
/// Unreadable menu input ends the session quietly; an unreadable launch value
/// is returned as an error.
pub fn run_session<R, W, F>(console: &mut Console<R, W>, mut on_run: F) -> SimResult<SessionEnd>
where
    R: BufRead,
    W: Write,
    F: FnMut(&mut Console<R, W>, RunReport) -> SimResult<()>,
{
    writeln!(console.output(), "{WELCOME}")?;
    loop {
        let Some(planet) = console.choose_planet()? else {
            return Ok(SessionEnd::InvalidMenuInput);
        };

        let config = console.read_launch(planet)?;
        let report = RunReport::new(planet, config);
        tracing::info!(
            %planet,
            speed_mps = config.speed_mps,
            angle_deg = config.angle_deg,
            gravity_mps2 = config.gravity_mps2,
            wind_mps = config.wind_mps,
            "run configured"
        );
        on_run(console, report)?;

        match console.read_i64("Enter 1 to exit or 0 to continue: ", "choice") {
            Ok(1) | Err(_) => return Ok(SessionEnd::Exited),
            Ok(_) => {}
        }
    }
}

/// Launch flags shared by both binaries. Supplying any of them skips the menu.
#[derive(Args, Clone, Debug, Default, PartialEq)]
pub struct LaunchArgs {
    /// mars, earth, moon, jupiter or custom (default earth, or custom with --gravity)
    #[arg(short, long)]
    pub planet: Option<Planet>,

    /// Initial velocity (m/s)
    #[arg(short = 'v', long)]
    pub speed: Option<f64>,

    /// Angle of projection (degrees)
    #[arg(short, long)]
    pub angle: Option<f64>,

    /// Acceleration due to gravity (m/s^2), custom planet only
    #[arg(short, long)]
    pub gravity: Option<f64>,

    /// Wind speed (m/s), positive for right, negative for left
    #[arg(short, long, allow_negative_numbers = true)]
    pub wind: Option<f64>,
}

impl LaunchArgs {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// `Ok(None)` when no flags were given and the interactive menu should run.
    pub fn resolve(&self) -> SimResult<Option<(Planet, LaunchConfig)>> {
        if self.is_empty() {
            return Ok(None);
        }

        let planet = match (self.planet, self.gravity) {
            (Some(planet), _) => planet,
            (None, Some(_)) => Planet::Custom,
            (None, None) => Planet::Earth,
        };
        let gravity_mps2 = match (planet.gravity_mps2(), self.gravity) {
            (Some(fixed), None) => fixed,
            (Some(fixed), Some(requested)) => {
                tracing::warn!(%planet, fixed, requested, "ignoring --gravity for a fixed planet");
                fixed
            }
            (None, Some(requested)) => requested,
            (None, None) => return Err(SimError::Missing("--gravity for the custom planet")),
        };
        let wind_mps = match self.wind {
            Some(wind) if planet.has_wind() => wind,
            Some(wind) => {
                tracing::warn!(%planet, wind, "ignoring --wind; this planet has no wind");
                0.0
            }
            None => 0.0,
        };
        let speed_mps = self.speed.ok_or(SimError::Missing("--speed"))?;
        let angle_deg = self.angle.ok_or(SimError::Missing("--angle"))?;

        LaunchConfig::new(speed_mps, angle_deg, gravity_mps2, wind_mps).map(|c| Some((planet, c)))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn empty_flags_mean_interactive() {
        assert_eq!(LaunchArgs::default().resolve().expect("resolve"), None);
    }

    #[test]
    fn gravity_flag_implies_custom_planet() {
        let args = LaunchArgs {
            speed: Some(10.0),
            angle: Some(30.0),
            gravity: Some(4.0),
            wind: Some(-1.5),
            ..Default::default()
        };
        let (planet, config) = args.resolve().expect("resolve").expect("launch");

        assert_eq!(planet, Planet::Custom);
        assert_eq!(config.gravity_mps2, 4.0);
        assert_eq!(config.wind_mps, -1.5);
    }

    #[test]
    fn fixed_planet_drops_wind() {
        let args = LaunchArgs {
            planet: Some(Planet::Jupiter),
            speed: Some(10.0),
            angle: Some(30.0),
            wind: Some(3.0),
            ..Default::default()
        };
        let (_, config) = args.resolve().expect("resolve").expect("launch");

        assert_eq!(config.gravity_mps2, 24.79);
        assert_eq!(config.wind_mps, 0.0);
    }

    #[test]
    fn partial_flags_report_what_is_missing() {
        let args = LaunchArgs {
            speed: Some(10.0),
            ..Default::default()
        };
        let err = args.resolve().expect_err("angle is missing");
        assert!(err.to_string().contains("--angle"));

        let custom = LaunchArgs {
            planet: Some(Planet::Custom),
            speed: Some(10.0),
            angle: Some(30.0),
            ..Default::default()
        };
        assert!(matches!(custom.resolve(), Err(SimError::Missing(_))));
    }

    #[test]
    fn read_f64_trims_whitespace() {
        let mut c = console("  12.5 \n");
        assert_eq!(c.read_f64("> ", "velocity").expect("parse"), 12.5);
    }

    #[test]
    fn read_f64_fails_fast_on_garbage() {
        let mut c = console("abc\n7\n");
        let err = c.read_f64("> ", "velocity").expect_err("should fail");
        assert!(err.to_string().contains("Invalid velocity: 'abc'"));
    }

    #[test]
    fn eof_is_reported() {
        let mut c = console("");
        assert!(matches!(c.read_f64("> ", "angle"), Err(SimError::UnexpectedEof)));
    }

    #[test]
    fn moon_skips_wind_prompt() {
        let mut c = console("30\n45\n");
        let config = c.read_launch(Planet::Moon).expect("launch");

        assert_eq!(config.gravity_mps2, 1.62);
        assert_eq!(config.wind_mps, 0.0);
        let out = String::from_utf8(c.into_output()).expect("utf8");
        assert!(!out.contains("wind"));
        assert!(out.contains("The acceleration due to gravity is 1.62"));
    }

    #[test]
    fn custom_asks_gravity_then_wind() {
        let mut c = console("5.5\n-2\n10\n60\n");
        let config = c.read_launch(Planet::Custom).expect("launch");

        assert_eq!(config.gravity_mps2, 5.5);
        assert_eq!(config.wind_mps, -2.0);
        assert_eq!(config.speed_mps, 10.0);
        assert_eq!(config.angle_deg, 60.0);
    }

    #[test]
    fn whole_number_gravity_keeps_its_decimal_point() {
        let mut c = console("5\n0\n10\n45\n");
        c.read_launch(Planet::Custom).expect("launch");

        let out = String::from_utf8(c.into_output()).expect("utf8");
        assert!(out.contains("The acceleration due to gravity is 5.0\n"));
    }
}
