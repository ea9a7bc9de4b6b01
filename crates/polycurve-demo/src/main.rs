//! Polycurve demo CLI
//!
//! Builds a fixed five-point Bezier curve and evaluates it.
//!
//! # Usage
//!
//! ```bash
//! # Evaluate at t = 1.0
//! polycurve_demo
//!
//! # Evaluate at a chosen parameter
//! polycurve_demo 0.25
//!
//! # Print 50 evenly spaced points for plotting
//! polycurve_demo --samples 50
//!
//! # Print an adaptive polyline within 0.001 of the curve
//! polycurve_demo --flatten 0.001
//! ```

use std::process;

use polycurve_core::traits::{BoundingBox, Validate};
use polycurve_core::{Result, Tolerance};
use polycurve_geometry::tessellate::{curve_to_polyline, uniform_parameters};
use polycurve_geometry::{BezierCurve, Curve};

const DEFAULT_T: f64 = 1.0;

const DEMO_POINTS: [(f64, f64); 5] = [(0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 0.0), (4.0, 0.0)];

fn print_usage() {
    eprintln!(
        r#"Polycurve demo

USAGE:
    polycurve_demo [t]
    polycurve_demo --samples <count>
    polycurve_demo --flatten <tolerance>

ARGS:
    [t]             Curve parameter in [0, 1] (defaults to 1.0)

OPTIONS:
    --samples       Print <count> evenly spaced curve points as "x y" lines
    --flatten       Print an adaptive polyline that stays within <tolerance> of the curve
    --help          Show this help message

ENVIRONMENT:
    RUST_LOG        Log filter (defaults to info)
"#
    );
}

fn build_curve() -> BezierCurve {
    let mut curve = BezierCurve::new();
    for &(x, y) in &DEMO_POINTS {
        curve.add_point(x, y);
    }
    log::info!(
        "built curve of degree {} from {} control points",
        curve.degree(),
        curve.len()
    );
    if let Some((min, max)) = curve.bounding_box() {
        log::debug!("control points span ({}, {}) to ({}, {})", min.x, min.y, max.x, max.y);
    }
    curve
}

fn handle_evaluate(t: f64) -> Result<()> {
    let curve = build_curve();
    curve.validate()?;
    let p = curve.evaluate(t)?;
    println!("({}, {})", p.x, p.y);
    Ok(())
}

fn handle_samples(count: usize) -> Result<()> {
    let curve = build_curve();
    for t in uniform_parameters(curve.domain(), count)? {
        let p = curve.evaluate(t)?;
        println!("{} {}", p.x, p.y);
    }
    Ok(())
}

fn handle_flatten(linear: f64) -> Result<()> {
    let curve = build_curve();
    for p in curve_to_polyline(&curve, Tolerance::new(linear))? {
        println!("{} {}", p.x, p.y);
    }
    Ok(())
}

fn option_value<'a>(args: &'a [String], flag: &str) -> &'a str {
    match args.get(2) {
        Some(raw) => raw.as_str(),
        None => {
            eprintln!("Error: {} requires a value\n", flag);
            print_usage();
            process::exit(1);
        }
    }
}

fn parse_or_exit<T: std::str::FromStr>(raw: &str, what: &str) -> T {
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Error: invalid {}: {}\n", what, raw);
            print_usage();
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().collect();

    let outcome = match args.get(1).map(String::as_str) {
        Some("--help") | Some("-h") => {
            print_usage();
            return;
        }
        Some("--samples") => {
            handle_samples(parse_or_exit(option_value(&args, "--samples"), "sample count"))
        }
        Some("--flatten") => {
            handle_flatten(parse_or_exit(option_value(&args, "--flatten"), "tolerance"))
        }
        Some(raw) => handle_evaluate(parse_or_exit(raw, "parameter")),
        None => handle_evaluate(DEFAULT_T),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
