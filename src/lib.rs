//! # Polyreg
//! ## Least-squares polynomial regression, start to finish
//!
//! This crate fits a polynomial of a chosen degree to a set of `(x, y)`
//! observations and reports everything a display layer needs: the fitted
//! coefficients, a canonical equation string, the effective degree,
//! actual-vs-predicted values, an R² score, and a dense curve for plotting.
//!
//! Parsing user input, laying out pages, and rendering tables are someone
//! else's job; this crate is the numerical engine behind them.
//!
//! ```rust
//! use polyreg::PolyFit;
//!
//! let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let ys = [1.0, 4.0, 9.0, 16.0, 25.0];
//!
//! let fit = PolyFit::new(&xs, &ys, 2)?;
//! assert_eq!(fit.equation(), "y = x^2");
//! assert_eq!(fit.effective_degree(), 2);
//!
//! let report = fit.report(&xs, &ys, 500)?;
//! println!("{report}");
//! # Ok::<(), polyreg::Error>(())
//! ```
//!
//! # Core Concepts
//! - [`basis`] expands raw x values into the monomial feature basis
//!   `1, x, x², …, xⁿ`.
//! - [`PolyFit`] solves the least-squares system over that basis using the
//!   SVD pseudo-inverse, so rank-deficient and underdetermined inputs
//!   produce a best-effort fit instead of a crash. The same inputs always
//!   produce the same coefficients.
//! - [`predict`] applies a coefficient vector to any basis-expanded input.
//! - [`score::r_squared`] computes the coefficient of determination, with
//!   the zero-variance case decided explicitly rather than left to float
//!   semantics.
//! - [`display`] renders coefficients into equation strings like
//!   `y = 1.00 - 2.00x + 0.50x^2` and computes the effective degree.
//! - [`report::FitReport`] bundles all of the above for a display layer.
//!
//! Every fit is synchronous and self-contained: no caches, no shared
//! state, no background work. The engine is equally at home in a blocking
//! request handler or a batch script.
//!
//! # Implementation Details
//!
//! This crate makes use of the `nalgebra` library for linear algebra
//! operations. The solver decomposes the design matrix with SVD and
//! discards singular values below `machine_epsilon * max(n, k) * σ_max`,
//! the standard pseudo-inverse cutoff.
//!
//! # Plotting
//!
//! With the `plotting` feature enabled, [`plot::render_fit`] draws the
//! observation scatter and the fitted curve to an SVG file.
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::needless_range_loop)] // The worst clippy lint
#![allow(clippy::cast_precision_loss)] // I don't care about this one
#![allow(clippy::float_cmp)] //           Exact comparisons here are deliberate
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "plotting")]
#[cfg_attr(docsrs, doc(cfg(feature = "plotting")))]
pub mod plot;

pub mod basis;
pub mod display;
pub mod error;
pub mod report;
pub mod score;
pub mod value;

mod fit;
pub use error::{Error, Result};
pub use fit::{predict, PolyFit};
pub use report::FitReport;

pub use nalgebra;
