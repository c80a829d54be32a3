use macroquad::prelude::{Color, WHITE};
use projectile_sim::core::planet::Planet;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) sky: Color,
    pub(crate) ground: Color,
    pub(crate) cloud: Option<Color>,
}

impl Theme {
    pub(crate) fn for_planet(planet: Planet) -> Self {
        match planet {
            Planet::Mars => Self {
                sky: Color::from_hex(0xFF6F61),
                ground: Color::from_hex(0xB22222),
                cloud: Some(Color::from_hex(0xC8C8C8)),
            },
            Planet::Moon => Self {
                sky: Color::from_hex(0xC0C0C0),
                ground: Color::from_hex(0xA9A9A9),
                cloud: None,
            },
            Planet::Jupiter => Self {
                sky: Color::from_hex(0xD2B48C),
                ground: Color::from_hex(0x8B4513),
                cloud: Some(Color::from_hex(0xF0DCC0)),
            },
            Planet::Earth | Planet::Custom => Self {
                sky: Color::from_hex(0x87CEEB),
                ground: Color::from_hex(0x90EE90),
                cloud: Some(WHITE),
            },
        }
    }
}
