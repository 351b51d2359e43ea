//! Procedural pixel-art planets
//!
//! Bakes a tileable equirectangular texture for a planet from seeded fractal
//! noise, then wraps it onto a pixel-perfect sphere silhouette that rotates a
//! little every frame. Satellites orbit on tilted ellipses and pass behind or
//! in front of the planet.
//!
//! The crate draws nothing itself: bodies emit pixels into a [`PixelSink`]
//! supplied by the host, and the host passes in its own frame counter.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use pixel_planet::*;
//!
//! let mut rng = SeededRandom::new(42);
//!
//! let config = PlanetConfigBuilder::new()
//!     .diameter(32).unwrap()
//!     .noise_mode(NoiseMode::DomainWarping)
//!     .lap_time(12.0).unwrap()
//!     .offset(DVec2::new(40.0, 40.0))
//!     .build()
//!     .unwrap();
//! let palette = Palette::new(vec![Some('~'), Some('.'), Some('^')], vec![3.0, 2.0, 1.0]).unwrap();
//! let planet = PlanetBody::new(config, Arc::new(palette), &mut rng).unwrap();
//!
//! let moon = SatelliteConfigBuilder::new(80.0)
//!     .diameter(4).unwrap()
//!     .offset(DVec2::new(40.0, 40.0))
//!     .build()
//!     .unwrap();
//! let scene = Scene::new(planet).with_satellite(SatelliteBody::new(moon, 'o').unwrap());
//!
//! let mut canvas: Canvas<char> = Canvas::new(80, 80);
//! scene.render(&mut canvas, 0);
//! assert!(canvas.filled_count() > 0);
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration and palettes

// Modules
pub mod error;
pub mod config;
pub mod random;
pub mod noise;
pub mod grid;
pub mod selection;
pub mod sphere;
pub mod palette;
pub mod render;
pub mod planet;
pub mod satellite;
pub mod scene;

// Re-export core types for convenience
pub use error::{PlanetError, Result};
pub use config::{NoiseMode, PlanetConfig, PlanetConfigBuilder, SatelliteConfig, SatelliteConfigBuilder};
pub use random::SeededRandom;
pub use noise::{NoiseField, SimplexNoise, DEFAULT_OCTAVES};
pub use grid::ToroidalGrid;
pub use selection::{select_index, select_random_index, weighted_choice};
pub use sphere::{SphereCache, SphereGeometry};
pub use palette::Palette;
pub use render::{plot_opt, Canvas, DrawPass, PixelSink, Renderable};
pub use planet::{PlanetBody, PLANE_ALIGNMENT};
pub use satellite::SatelliteBody;
pub use scene::Scene;

// Re-export glam vector types used in the public API
pub use glam::{DVec2, DVec3};
