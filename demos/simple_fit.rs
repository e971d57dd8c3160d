//! Fits a quadratic to a handful of points and prints the results.
use polyreg::PolyFit;

fn main() -> Result<(), polyreg::Error> {
    let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
    let ys = [1.0, 4.0, 9.0, 16.0, 25.0];

    let fit = PolyFit::new(&xs, &ys, 2)?;

    println!("{}", fit.equation());
    println!("Coefficients: {:?}", fit.coefficients());
    println!("Effective degree: {}", fit.effective_degree());
    println!("y(2.5) = {}", fit.y(2.5));

    Ok(())
}
