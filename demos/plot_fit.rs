//! Renders a fitted curve over its source data to `fit.svg`.
//!
//! Run with `cargo run --example plot_fit --features plotting`.
use polyreg::PolyFit;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let xs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let ys = [1.2, 3.9, 9.3, 15.8, 25.5, 35.7, 49.1];

    let fit = PolyFit::new(&xs, &ys, 2)?;
    let (grid, predictions) = fit.dense_curve(500);

    let data: Vec<_> = xs.iter().copied().zip(ys).collect();
    let curve: Vec<_> = grid.into_iter().zip(predictions).collect();

    polyreg::plot::render_fit(
        "fit.svg".as_ref(),
        &data,
        &curve,
        "Polynomial Regression",
    )?;
    println!("Wrote fit.svg ({})", fit.equation());

    Ok(())
}
