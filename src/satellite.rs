//! Satellites on tilted elliptical orbits

use std::f64::consts::PI;
use std::sync::Arc;

use glam::DVec2;

use crate::config::SatelliteConfig;
use crate::error::{PlanetError, Result};
use crate::render::{DrawPass, PixelSink, Renderable};
use crate::sphere::SphereGeometry;

/// A flat-shaded disk orbiting the planet
///
/// Depth is faked from the orbital phase: for half of every revolution the
/// satellite is drawn in the back pass (behind the planet), for the other
/// half in the front pass.
///
/// # Example
///
/// ```rust
/// use pixel_planet::*;
///
/// let config = SatelliteConfigBuilder::new(240.0).diameter(5).unwrap().build().unwrap();
/// let moon = SatelliteBody::new(config, 'o').unwrap();
///
/// let front = moon.is_visible(90, DrawPass::Front);
/// assert_ne!(front, moon.is_visible(90, DrawPass::Back));
/// ```
#[derive(Debug, Clone)]
pub struct SatelliteBody<C> {
    config: SatelliteConfig,
    color: C,
    geometry: Arc<SphereGeometry>,
    sin: f64,
    cos: f64,
}

impl<C: Copy> SatelliteBody<C> {
    /// Create a satellite, computing its own sphere geometry
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for a zero diameter
    pub fn new(config: SatelliteConfig, color: C) -> Result<Self> {
        let geometry = Arc::new(SphereGeometry::new(config.diameter)?);
        Self::with_geometry(config, color, geometry)
    }

    /// Create a satellite that shares an existing sphere geometry
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the geometry diameter differs from the
    /// configured one or an orbital parameter is not finite
    pub fn with_geometry(config: SatelliteConfig, color: C, geometry: Arc<SphereGeometry>) -> Result<Self> {
        config.validate()?;
        if geometry.diameter() != config.diameter {
            return Err(PlanetError::InvalidConfiguration(format!(
                "geometry diameter {} does not match satellite diameter {}",
                geometry.diameter(),
                config.diameter
            )));
        }
        let tilt = (config.rotate % 360.0).to_radians();
        Ok(Self {
            config,
            color,
            geometry,
            sin: tilt.sin(),
            cos: tilt.cos(),
        })
    }

    #[inline]
    pub fn config(&self) -> &SatelliteConfig {
        &self.config
    }

    #[inline]
    pub fn color(&self) -> C {
        self.color
    }

    #[inline]
    pub fn geometry(&self) -> &Arc<SphereGeometry> {
        &self.geometry
    }

    /// Orbital phase in radians at `frame`, within (-2π, 2π)
    ///
    /// The remainder keeps the sign of its dividend, so the phase runs
    /// negative as frames advance.
    pub fn phase(&self, frame: u64) -> f64 {
        let degrees = (-(frame as f64) - self.config.init_angle) * self.config.speed % 360.0;
        degrees * PI / 180.0
    }

    /// Whether the satellite belongs to `pass` at `frame`
    pub fn is_visible(&self, frame: u64, pass: DrawPass) -> bool {
        pass.is_back() == (self.phase(frame).abs() < PI)
    }

    /// Centre of the satellite relative to its orbit centre
    pub fn position(&self, frame: u64) -> DVec2 {
        let rad = self.phase(frame);
        let ex = self.config.a * rad.cos();
        let ey = self.config.b * rad.sin();
        DVec2::new(ex * self.cos - ey * self.sin, ex * self.sin + ey * self.cos)
    }
}

impl<C: Copy> Renderable<C> for SatelliteBody<C> {
    fn draw(&self, sink: &mut dyn PixelSink<C>, frame: u64, pass: DrawPass) {
        if !self.is_visible(frame, pass) {
            return;
        }
        let p = self.position(frame) + self.config.offset;
        let half = self.config.diameter as f64 / 2.0;

        for (y, span) in self.geometry.spans() {
            let sw = span as f64;
            for x in 0..span {
                sink.plot(p.x + x as f64 - sw / 2.0 + 0.5, p.y + y as f64 - half, self.color);
            }
        }
    }
}
