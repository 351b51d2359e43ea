//! Renders a few frames of a planet and its moons as ASCII art

use std::sync::Arc;

use pixel_planet::*;

const WIDTH: usize = 72;
const HEIGHT: usize = 40;

fn main() -> Result<()> {
    let mut rng = SeededRandom::new(2024);
    let mut spheres = SphereCache::new();
    let center = DVec2::new(WIDTH as f64 / 2.0, HEIGHT as f64 / 2.0);

    let config = PlanetConfigBuilder::new()
        .diameter(28)?
        .noise_mode(NoiseMode::Simplex)
        .lap_time(4.0)?
        .offset(center)
        .build()?;
    let palette = Palette::new(vec![Some('~'), Some('-'), Some('#'), Some('^')], vec![4.0, 1.0, 3.0, 1.0])?
        .with_back_color('.');
    let planet = PlanetBody::with_geometry(config, Arc::new(palette), spheres.get(config.diameter)?, &mut rng)?;

    println!("Texture usage per palette slot: {:?}", planet.palette_histogram());

    let mut scene = Scene::new(planet);
    for (diameter, a, b, rotate, init_angle, color) in [(5, 30.0, 6.0, -15.0, 0.0, 'O'), (3, 22.0, 3.0, 20.0, 120.0, 'o')] {
        let moon = SatelliteConfigBuilder::new(WIDTH as f64)
            .diameter(diameter)?
            .orbit(a, b)
            .rotate(rotate)
            .init_angle(init_angle)
            .speed(4.0)
            .offset(center)
            .build()?;
        scene.add_satellite(SatelliteBody::with_geometry(moon, color, spheres.get(diameter)?)?);
    }
    println!("Distinct sphere tables: {}", spheres.len());

    let mut canvas: Canvas<char> = Canvas::new(WIDTH, HEIGHT);
    for frame in [0, 15, 30] {
        canvas.clear();
        scene.render(&mut canvas, frame);
        println!("\nFrame {}:", frame);
        print_canvas(&canvas);
    }

    let strip = scene.planet().grid();
    let mut plane: Canvas<char> = Canvas::new(strip.width(), strip.height());
    scene.render_plane(&mut plane, 0);
    println!("\nFlat texture:");
    print_canvas(&plane);

    Ok(())
}

fn print_canvas(canvas: &Canvas<char>) {
    for row in canvas.rows() {
        let line: String = row.iter().map(|c| c.unwrap_or(' ')).collect();
        println!("{}", line.trim_end());
    }
}
