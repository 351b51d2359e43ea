//! Planet and satellite configuration and builders
//!
//! Configuration is validated once, when a builder is finished. Bodies built
//! from a valid configuration cannot fail while rendering.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::DVec2;

use crate::error::{PlanetError, Result};

/// How the planet texture turns noise into a value for palette selection
///
/// The discriminants are stable and match existing configuration data.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum NoiseMode {
    /// Fractal simplex noise: continents and blotches
    #[default]
    Simplex = 0,
    /// Inverted fractal ridged noise: cracks and canyons
    Ridged = 1,
    /// Fractal simplex noise on a warped domain: swirls
    DomainWarping = 2,
    /// Wavy bands running pole to pole
    VStripe = 3,
    /// Wavy bands parallel to the equator, like a gas giant
    HStripe = 4,
    /// Noisy gradient from the north pole to the south pole
    Gradation = 5,
}

impl NoiseMode {
    /// Every mode, in discriminant order
    pub const ALL: [NoiseMode; 6] = [
        NoiseMode::Simplex,
        NoiseMode::Ridged,
        NoiseMode::DomainWarping,
        NoiseMode::VStripe,
        NoiseMode::HStripe,
        NoiseMode::Gradation,
    ];

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            NoiseMode::Simplex => "Simplex",
            NoiseMode::Ridged => "Ridged",
            NoiseMode::DomainWarping => "DomainWarping",
            NoiseMode::VStripe => "VStripe",
            NoiseMode::HStripe => "HStripe",
            NoiseMode::Gradation => "Gradation",
        }
    }
}

impl TryFrom<u8> for NoiseMode {
    type Error = PlanetError;

    fn try_from(value: u8) -> Result<Self> {
        NoiseMode::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| PlanetError::InvalidConfiguration(format!("unknown noise mode {}", value)))
    }
}

/// Configuration for a textured, rotating planet
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetConfig {
    /// Silhouette diameter in pixels; the texture is `2 * diameter` wide
    pub diameter: u32,

    /// Noise composition used to bake the texture
    pub noise_mode: NoiseMode,

    /// Seconds per full rotation, assuming 30 frames per second
    pub lap_time: f64,

    /// Top-left anchor of the flat texture strip
    pub plane_offset: DVec2,

    /// Centre anchor of the sphere
    pub offset: DVec2,
}

impl PlanetConfig {
    /// Horizontal texture scroll in grid columns per frame
    #[inline]
    pub fn speed(&self) -> f64 {
        self.diameter as f64 / 30.0 / self.lap_time
    }
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            diameter: 32,
            noise_mode: NoiseMode::default(),
            lap_time: 1.0,
            plane_offset: DVec2::ZERO,
            offset: DVec2::ZERO,
        }
    }
}

/// Builder for [`PlanetConfig`] with validation
///
/// # Example
///
/// ```rust
/// use pixel_planet::*;
///
/// let config = PlanetConfigBuilder::new()
///     .diameter(48).unwrap()
///     .noise_mode(NoiseMode::HStripe)
///     .lap_time(20.0).unwrap()
///     .offset(DVec2::new(120.0, 120.0))
///     .build()
///     .unwrap();
/// assert_eq!(config.diameter, 48);
/// ```
#[derive(Debug, Clone)]
pub struct PlanetConfigBuilder {
    config: PlanetConfig,
}

impl PlanetConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - diameter: 32
    /// - noise_mode: Simplex
    /// - lap_time: 1 second
    /// - offsets: origin
    pub fn new() -> Self {
        Self {
            config: PlanetConfig::default(),
        }
    }

    /// Set the silhouette diameter
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if diameter is zero
    pub fn diameter(mut self, diameter: u32) -> Result<Self> {
        if diameter == 0 {
            return Err(PlanetError::InvalidConfiguration(
                "planet diameter must be positive".to_string(),
            ));
        }
        self.config.diameter = diameter;
        Ok(self)
    }

    pub fn noise_mode(mut self, mode: NoiseMode) -> Self {
        self.config.noise_mode = mode;
        self
    }

    /// Set the seconds taken for one full rotation
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if lap time is not a positive finite number
    pub fn lap_time(mut self, seconds: f64) -> Result<Self> {
        if !(seconds.is_finite() && seconds > 0.0) {
            return Err(PlanetError::InvalidConfiguration(format!(
                "lap time must be positive (got {})",
                seconds
            )));
        }
        self.config.lap_time = seconds;
        Ok(self)
    }

    pub fn plane_offset(mut self, offset: DVec2) -> Self {
        self.config.plane_offset = offset;
        self
    }

    pub fn offset(mut self, offset: DVec2) -> Self {
        self.config.offset = offset;
        self
    }

    pub fn build(self) -> Result<PlanetConfig> {
        Ok(self.config)
    }
}

impl Default for PlanetConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a single-colour satellite on an elliptical orbit
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatelliteConfig {
    /// Silhouette diameter in pixels
    pub diameter: u32,

    /// Orbital speed in degrees per frame
    pub speed: f64,

    /// Horizontal semi-axis of the orbit
    pub a: f64,

    /// Vertical semi-axis of the orbit; zero gives an edge-on orbit
    pub b: f64,

    /// Starting phase, in frames
    pub init_angle: f64,

    /// Tilt of the orbit in degrees, normally within -90..90
    pub rotate: f64,

    /// Centre of the orbit
    pub offset: DVec2,
}

impl SatelliteConfig {
    /// Check that every orbital parameter is finite
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` naming the first non-finite field
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("speed", self.speed),
            ("a", self.a),
            ("b", self.b),
            ("init_angle", self.init_angle),
            ("rotate", self.rotate),
        ] {
            if !value.is_finite() {
                return Err(PlanetError::InvalidConfiguration(format!(
                    "satellite {} must be finite (got {})",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Builder for [`SatelliteConfig`] with validation
///
/// # Example
///
/// ```rust
/// use pixel_planet::*;
///
/// let config = SatelliteConfigBuilder::new(240.0)
///     .diameter(6).unwrap()
///     .orbit(70.0, 12.0)
///     .rotate(-20.0)
///     .build()
///     .unwrap();
/// assert_eq!(config.a, 70.0);
/// ```
#[derive(Debug, Clone)]
pub struct SatelliteConfigBuilder {
    config: SatelliteConfig,
}

impl SatelliteConfigBuilder {
    /// Create a new builder for a canvas `canvas_width` pixels wide
    ///
    /// Defaults:
    /// - diameter: 4
    /// - speed: 1 degree per frame
    /// - a: a third of the canvas width
    /// - b, init_angle, rotate: 0
    /// - offset: origin
    pub fn new(canvas_width: f64) -> Self {
        Self {
            config: SatelliteConfig {
                diameter: 4,
                speed: 1.0,
                a: canvas_width / 3.0,
                b: 0.0,
                init_angle: 0.0,
                rotate: 0.0,
                offset: DVec2::ZERO,
            },
        }
    }

    /// Set the silhouette diameter
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if diameter is zero
    pub fn diameter(mut self, diameter: u32) -> Result<Self> {
        if diameter == 0 {
            return Err(PlanetError::InvalidConfiguration(
                "satellite diameter must be positive".to_string(),
            ));
        }
        self.config.diameter = diameter;
        Ok(self)
    }

    pub fn speed(mut self, degrees_per_frame: f64) -> Self {
        self.config.speed = degrees_per_frame;
        self
    }

    /// Set both semi-axes of the orbit
    pub fn orbit(mut self, a: f64, b: f64) -> Self {
        self.config.a = a;
        self.config.b = b;
        self
    }

    pub fn init_angle(mut self, angle: f64) -> Self {
        self.config.init_angle = angle;
        self
    }

    pub fn rotate(mut self, degrees: f64) -> Self {
        self.config.rotate = degrees;
        self
    }

    pub fn offset(mut self, offset: DVec2) -> Self {
        self.config.offset = offset;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if any orbital parameter is not finite
    pub fn build(self) -> Result<SatelliteConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_mode_discriminants() {
        assert_eq!(NoiseMode::Simplex as u8, 0);
        assert_eq!(NoiseMode::Ridged as u8, 1);
        assert_eq!(NoiseMode::DomainWarping as u8, 2);
        assert_eq!(NoiseMode::VStripe as u8, 3);
        assert_eq!(NoiseMode::HStripe as u8, 4);
        assert_eq!(NoiseMode::Gradation as u8, 5);
    }

    #[test]
    fn test_noise_mode_try_from() {
        for mode in NoiseMode::ALL {
            assert_eq!(NoiseMode::try_from(mode as u8).unwrap(), mode);
        }
        assert!(NoiseMode::try_from(6).is_err());
        assert_eq!(NoiseMode::Gradation.name(), "Gradation");
    }

    #[test]
    fn test_planet_builder_defaults() {
        let config = PlanetConfigBuilder::new().build().unwrap();
        assert_eq!(config.diameter, 32);
        assert_eq!(config.noise_mode, NoiseMode::Simplex);
        assert_eq!(config.lap_time, 1.0);
        assert_eq!(config.offset, DVec2::ZERO);
    }

    #[test]
    fn test_planet_speed() {
        let config = PlanetConfigBuilder::new()
            .diameter(60)
            .unwrap()
            .lap_time(4.0)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.speed(), 0.5);
    }

    #[test]
    fn test_planet_builder_invalid() {
        assert!(PlanetConfigBuilder::new().diameter(0).is_err());
        assert!(PlanetConfigBuilder::new().lap_time(0.0).is_err());
        assert!(PlanetConfigBuilder::new().lap_time(-2.0).is_err());
        assert!(PlanetConfigBuilder::new().lap_time(f64::NAN).is_err());
    }

    #[test]
    fn test_satellite_builder_defaults() {
        let config = SatelliteConfigBuilder::new(300.0).build().unwrap();
        assert_eq!(config.a, 100.0);
        assert_eq!(config.b, 0.0);
        assert_eq!(config.speed, 1.0);
        assert_eq!(config.rotate, 0.0);
    }

    #[test]
    fn test_satellite_builder_invalid() {
        assert!(SatelliteConfigBuilder::new(300.0).diameter(0).is_err());
        assert!(SatelliteConfigBuilder::new(300.0)
            .speed(f64::INFINITY)
            .build()
            .is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = PlanetConfigBuilder::new()
            .diameter(20)
            .unwrap()
            .noise_mode(NoiseMode::Ridged)
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: PlanetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
