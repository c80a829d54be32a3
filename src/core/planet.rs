use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::constants::{
    EARTH_GRAVITY_MPS2, JUPITER_GRAVITY_MPS2, MARS_GRAVITY_MPS2, MOON_GRAVITY_MPS2,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Mars,
    Earth,
    Moon,
    Jupiter,
    Custom,
}

impl Planet {
    pub const MENU: [Planet; 5] = [
        Planet::Mars,
        Planet::Earth,
        Planet::Moon,
        Planet::Jupiter,
        Planet::Custom,
    ];

    /// Menu numbers start at 1.
    pub fn from_menu_choice(choice: i64) -> Option<Self> {
        usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| Self::MENU.get(idx).copied())
    }

    /// `None` for `Custom`, whose gravity comes from the user.
    pub fn gravity_mps2(self) -> Option<f64> {
        match self {
            Self::Mars => Some(MARS_GRAVITY_MPS2),
            Self::Earth => Some(EARTH_GRAVITY_MPS2),
            Self::Moon => Some(MOON_GRAVITY_MPS2),
            Self::Jupiter => Some(JUPITER_GRAVITY_MPS2),
            Self::Custom => None,
        }
    }

    pub fn has_wind(self) -> bool {
        matches!(self, Self::Earth | Self::Custom)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Mars => "mars",
            Self::Earth => "earth",
            Self::Moon => "moon",
            Self::Jupiter => "jupiter",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::MENU
            .into_iter()
            .find(|p| p.name() == needle)
            .ok_or_else(|| {
                format!("unknown planet '{s}' (expected mars, earth, moon, jupiter or custom)")
            })
    }
}
