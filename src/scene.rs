//! A planet with its satellites, drawn in painter's order

use crate::planet::PlanetBody;
use crate::render::{DrawPass, PixelSink, Renderable};
use crate::satellite::SatelliteBody;

/// One planet and any number of satellites
///
/// Per frame the scene draws satellites behind the planet, the planet's far
/// hemisphere (only if its palette has a back colour), the near hemisphere,
/// and finally satellites in front. Later plots overwrite earlier ones.
#[derive(Debug, Clone)]
pub struct Scene<C> {
    planet: PlanetBody<C>,
    satellites: Vec<SatelliteBody<C>>,
}

impl<C: Copy> Scene<C> {
    pub fn new(planet: PlanetBody<C>) -> Self {
        Self {
            planet,
            satellites: Vec::new(),
        }
    }

    /// Add a satellite; satellites added later draw over earlier ones
    pub fn with_satellite(mut self, satellite: SatelliteBody<C>) -> Self {
        self.satellites.push(satellite);
        self
    }

    pub fn add_satellite(&mut self, satellite: SatelliteBody<C>) {
        self.satellites.push(satellite);
    }

    #[inline]
    pub fn planet(&self) -> &PlanetBody<C> {
        &self.planet
    }

    #[inline]
    pub fn satellites(&self) -> &[SatelliteBody<C>] {
        &self.satellites
    }

    /// Draw every body for `frame`
    pub fn render(&self, sink: &mut dyn PixelSink<C>, frame: u64) {
        for pass in DrawPass::ALL {
            if pass.is_back() {
                self.draw_satellites(sink, frame, pass);
                if self.planet.has_back() {
                    self.planet.draw(sink, frame, pass);
                }
            } else {
                self.planet.draw(sink, frame, pass);
                self.draw_satellites(sink, frame, pass);
            }
        }
    }

    /// Draw the planet's flat texture strip for `frame`
    pub fn render_plane(&self, sink: &mut dyn PixelSink<C>, frame: u64) {
        self.planet.draw_plane(sink, frame);
    }

    fn draw_satellites(&self, sink: &mut dyn PixelSink<C>, frame: u64, pass: DrawPass) {
        for satellite in &self.satellites {
            satellite.draw(sink, frame, pass);
        }
    }
}
