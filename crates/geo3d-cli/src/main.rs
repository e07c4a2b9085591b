//! geo3d CLI - exercise the point, line and cube primitives from the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use geo3d_primitives::{Cube3D, Line3D, Point3D};
use std::f64::consts::FRAC_PI_4;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod scene;

use scene::Scene;

#[derive(Parser)]
#[command(name = "geo3d")]
#[command(about = "3D point, line and cube geometry", long_about = None)]
struct Cli {
    /// Show diagnostics (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Distance, midpoint and rotations of two points
    Point {
        #[arg(long, value_parser = parse_point, default_value = "1,2,3", allow_hyphen_values = true)]
        a: Point3D,
        #[arg(long, value_parser = parse_point, default_value = "4,6,8", allow_hyphen_values = true)]
        b: Point3D,
    },
    /// Length, parallelism and distances of two lines
    Line {
        /// First line as "x,y,z:x,y,z"
        #[arg(long, value_parser = parse_line, default_value = "0,0,0:1,1,1", allow_hyphen_values = true)]
        first: Line3D,
        /// Second line as "x,y,z:x,y,z"
        #[arg(long, value_parser = parse_line, default_value = "0,1,0:1,2,1", allow_hyphen_values = true)]
        second: Line3D,
        /// Point measured against the first line
        #[arg(long, value_parser = parse_point, default_value = "0,0,1", allow_hyphen_values = true)]
        point: Point3D,
    },
    /// Build a cube, then translate and rotate it about each axis
    Cube {
        #[arg(long, value_parser = parse_point, default_value = "0,0,0", allow_hyphen_values = true)]
        origin: Point3D,
        #[arg(long, default_value_t = 1.0)]
        side: f64,
        /// Translation applied before the rotations
        #[arg(long, value_parser = parse_point, default_value = "1,2,3", allow_hyphen_values = true)]
        translate: Point3D,
        /// Rotation angle in radians, applied about X, then Y, then Z
        #[arg(long, default_value_t = FRAC_PI_4, allow_hyphen_values = true)]
        angle: f64,
    },
    /// Run a TOML scene file
    Scene {
        /// Path to the scene file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Point { a, b } => show_points(&a, &b)?,
        Commands::Line {
            first,
            second,
            point,
        } => show_lines(&first, &second, &point),
        Commands::Cube {
            origin,
            side,
            translate,
            angle,
        } => show_cube(origin, side, &translate, angle)?,
        Commands::Scene { file } => run_scene(&file)?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn show_points(a: &Point3D, b: &Point3D) -> Result<()> {
    println!("A: {a}");
    println!("B: {b}");
    println!("Distance: {}", a.try_distance_to(Some(b))?);
    println!("Midpoint: {}", a.try_midpoint(Some(b))?);
    println!("Rotate Z (90°): {}", a.rotate_around_z(90.0));
    println!("Rotate X (45°): {}", a.rotate_around_x(45.0));
    println!("Rotate Y (30°): {}", a.rotate_around_y(30.0));
    Ok(())
}

fn show_lines(first: &Line3D, second: &Line3D, point: &Point3D) {
    println!("Line 1: {first}");
    println!("Line 2: {second}");
    println!("Length of line 1: {}", first.length());
    println!("Parallel: {}", first.is_parallel_to(second));
    println!("Shortest distance: {}", first.shortest_distance_to(second));
    println!(
        "Distance from {point} to line 1: {}",
        first.point_to_line_distance(point)
    );
}

fn show_cube(origin: Point3D, side: f64, translate: &Point3D, angle: f64) -> Result<()> {
    let mut cube = Cube3D::new(origin, side)?;
    println!("Cube: {cube}");
    println!("Perimeter: {}", cube.perimeter());
    println!("Volume: {}", cube.volume());
    println!("Valid: {}", cube.is_valid_cube());

    cube.translate(translate.x(), translate.y(), translate.z());
    println!("After translation: {cube}");
    cube.rotate_x(angle);
    println!("After rotation around X: {cube}");
    cube.rotate_y(angle);
    println!("After rotation around Y: {cube}");
    cube.rotate_z(angle);
    println!("After rotation around Z: {cube}");
    println!("Valid: {}", cube.is_valid_cube());
    Ok(())
}

fn run_scene(path: &PathBuf) -> Result<()> {
    let scene = Scene::load(path)?;
    let cube = scene.run(|step, cube| match step {
        None => println!("Cube: {cube}"),
        Some(step) => println!("After {step}: {cube}"),
    })?;
    println!("Perimeter: {}", cube.perimeter());
    println!("Volume: {}", cube.volume());
    println!("Valid: {}", cube.is_valid_cube_within(&scene.tolerance));
    Ok(())
}

/// Parse `"x,y,z"` into a point.
fn parse_point(s: &str) -> std::result::Result<Point3D, String> {
    let coords = s
        .split(',')
        .map(|c| c.trim().parse::<f64>().map_err(|e| format!("{c:?}: {e}")))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    match coords.as_slice() {
        &[x, y, z] => Ok(Point3D::new(x, y, z)),
        _ => Err(format!("expected x,y,z but got {} values", coords.len())),
    }
}

/// Parse `"x,y,z:x,y,z"` into a line.
fn parse_line(s: &str) -> std::result::Result<Line3D, String> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| format!("expected start:end, got {s:?}"))?;
    Ok(Line3D::new(parse_point(start)?, parse_point(end)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("1,-2, 3.5"), Ok(Point3D::new(1.0, -2.0, 3.5)));
        assert!(parse_point("1,2").is_err());
        assert!(parse_point("1,2,x").is_err());
    }

    #[test]
    fn test_parse_line() {
        let line = parse_line("0,0,0:1,1,1").unwrap();
        assert_eq!(line.end(), Point3D::new(1.0, 1.0, 1.0));
        assert!(parse_line("0,0,0").is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["geo3d", "cube"]).unwrap();
        match cli.command {
            Commands::Cube { origin, side, .. } => {
                assert_eq!(origin, Point3D::origin());
                assert_eq!(side, 1.0);
            }
            _ => panic!("expected cube command"),
        }
    }

    #[test]
    fn test_negative_coordinates() {
        let cli = Cli::try_parse_from(["geo3d", "point", "--a", "-1,-2,-3"]).unwrap();
        match cli.command {
            Commands::Point { a, .. } => assert_eq!(a, Point3D::new(-1.0, -2.0, -3.0)),
            _ => panic!("expected point command"),
        }
    }
}
