//! Produces the full fit summary a display layer would consume:
//! equation, coefficients, actual-vs-predicted table, R² and curve.
use polyreg::{report::DEFAULT_CURVE_RESOLUTION, PolyFit};

fn main() -> Result<(), polyreg::Error> {
    // Noisy-ish cubic
    let xs: Vec<f64> = (0..20).map(f64::from).collect();
    let ys: Vec<f64> = xs
        .iter()
        .map(|x| 0.5 * x * x * x - 2.0 * x * x + x + 3.0 + (x * 12.9898).sin())
        .collect();

    let fit = PolyFit::new(&xs, &ys, 3)?;
    let report = fit.report(&xs, &ys, DEFAULT_CURVE_RESOLUTION)?;

    println!("{report}");
    Ok(())
}
