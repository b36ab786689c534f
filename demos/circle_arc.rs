//! Quarter-circle approximation with a constant cubic Bezier.
//!
//! ```text
//! cargo run --example circle_arc
//! RUST_LOG=geoprim=debug cargo run --example circle_arc   # show rejected input
//! ```

use geoprim::geometry::{Bezier, Circle, Vector3d};
use geoprim::operations::{area, norm};
use geoprim::Result;

/// Control points of the usual four-point quarter arc of the unit circle.
const QUARTER: Bezier<3, Vector3d, [Vector3d; 4]> = Bezier::from_array([
    Vector3d::new(1.0, 0.0, 0.0),
    Vector3d::new(1.0, 0.558, 0.0),
    Vector3d::new(0.558, 1.0, 0.0),
    Vector3d::new(0.0, 1.0, 0.0),
]);

/// Evaluated while compiling.
const MIDPOINT: Vector3d = QUARTER.evaluate_at_const(0.5);

fn main() -> Result<()> {
    // Default: WARN for everything. Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    println!("midpoint (const)   {MIDPOINT}");
    println!("midpoint (runtime) {}", QUARTER.evaluate_at(0.5));

    let mut worst: f64 = 0.0;
    for k in 0..=16 {
        let t = f64::from(k) / 16.0;
        let p = QUARTER.evaluate_at(t);
        let error = (norm(&p) - 1.0).abs();
        worst = worst.max(error);
        println!("t = {t:.4}  {p}  radial error {error:.5}");
    }
    println!("worst radial error {worst:.5}");

    let unit = Circle::new(Vector3d::default(), 1.0)?;
    println!("unit circle area {:.6}", area(&unit));

    if let Err(err) = Circle::new(Vector3d::default(), -1.0) {
        println!("rejected: {err}");
    }
    Ok(())
}
