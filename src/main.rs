use anyhow::{Context, Result};
use clap::Parser;
use std::time::SystemTime;
use vincenty::{Coordinate, SolverResult, VincentySolver, WGS84};

#[derive(Parser, Debug)]
#[command(name = "vincenty")]
#[command(about = "Compute the geodesic distance between two points on the WGS-84 ellipsoid using Vincenty's inverse formula.", long_about = None)]
struct Cli {
    /// Name of the first point
    #[arg(long, default_value_t = String::from("Tokyo, Japan"))]
    from_name: String,

    /// Latitude of the first point in degrees [-90, 90]
    #[arg(long, default_value_t = 35.652832, allow_negative_numbers = true)]
    from_lat: f64,

    /// Longitude of the first point in degrees [-180, 180]
    #[arg(long, default_value_t = 139.839478, allow_negative_numbers = true)]
    from_lon: f64,

    /// Name of the second point
    #[arg(long, default_value_t = String::from("Manila, Philippines"))]
    to_name: String,

    /// Latitude of the second point in degrees [-90, 90]
    #[arg(long, default_value_t = 14.599512, allow_negative_numbers = true)]
    to_lat: f64,

    /// Longitude of the second point in degrees [-180, 180]
    #[arg(long, default_value_t = 120.984222, allow_negative_numbers = true)]
    to_lon: f64,

    /// Iteration budget before giving up on convergence
    #[arg(short, long, default_value_t = 100)]
    max_iterations: u32,

    /// Print how long the solve took
    #[arg(short, long, default_value_t = false)]
    timing: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let from = Coordinate::named(&cli.from_name, cli.from_lat, cli.from_lon)
        .with_context(|| format!("invalid first point {:?}", cli.from_name))?;
    let to = Coordinate::named(&cli.to_name, cli.to_lat, cli.to_lon)
        .with_context(|| format!("invalid second point {:?}", cli.to_name))?;

    let solver = VincentySolver::new(WGS84).with_max_iterations(cli.max_iterations);

    println!("From: {}", from);
    println!("To: {}", to);

    let now = SystemTime::now();
    let result = solver.solve(&from, &to);
    if cli.timing {
        if let Ok(elapsed) = now.elapsed() {
            println!("{} s", elapsed.as_secs_f64());
        }
    }

    match result {
        SolverResult::Distance(meters) => println!("Distance: {} meters", meters),
        SolverResult::NonConvergent => println!(
            "No distance: solution did not converge within {} iterations (points may be nearly antipodal)",
            solver.max_iterations()
        ),
    }

    Ok(())
}
