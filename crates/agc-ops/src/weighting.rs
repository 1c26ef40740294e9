//! Weighted probability distribution for the AGCWD family.
//!
//! The weighted PDF stretches the plain intensity PDF by min/max
//! normalization and an adjusting exponent `alpha`:
//!
//! ```text
//! pdf_w(l) = max_pdf * ((pdf(l) - min_pdf) / (max_pdf - min_pdf))^alpha
//! ```
//!
//! where `min_pdf` and `max_pdf` range over the full level grid, so
//! `min_pdf` is 0 for any channel that leaves part of the grid
//! unoccupied (see [`Pdf::mass_range`]).
//!
//! The weighted CDF is the running sum of `pdf_w`, normalized by a single
//! final division by the total weighted mass. (Historical revisions also
//! divided every cumulative entry by the same total as they went; the two
//! formulations are numerically identical, and the final-division form is
//! the one implemented here for both AGCWD and IAGCWD.)

use crate::stats::Pdf;
use crate::{AgcError, AgcResult};
use std::collections::BTreeMap;

/// Normalized weighted cumulative distribution over observed levels.
#[derive(Debug, Clone)]
pub struct WeightedCdf {
    values: BTreeMap<u32, f64>,
    l_max: u32,
}

impl WeightedCdf {
    /// Builds the weighted CDF from a PDF with adjusting parameter
    /// `alpha`.
    ///
    /// # Errors
    ///
    /// - [`AgcError::InvalidParameter`] if `alpha` is not a positive
    ///   finite number (the power law is undefined at zero otherwise).
    /// - [`AgcError::DegenerateInput`] if fewer than two distinct levels
    ///   occur, if the PDF is flat over the whole grid (min == max, the
    ///   normalization denominator vanishes), or if the weighted mass
    ///   sums to zero.
    pub fn from_pdf(pdf: &Pdf, alpha: f64) -> AgcResult<Self> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(AgcError::InvalidParameter(format!(
                "adjusting parameter must be a positive finite number, got {alpha}"
            )));
        }
        if pdf.len() < 2 {
            return Err(AgcError::DegenerateInput(
                "histogram has fewer than two distinct levels".into(),
            ));
        }
        let (min_pdf, max_pdf) = pdf.mass_range();
        let spread = max_pdf - min_pdf;
        if !(spread > 0.0) || !spread.is_finite() {
            return Err(AgcError::DegenerateInput(
                "flat histogram: max and min probability mass coincide".into(),
            ));
        }

        let mut weighted: BTreeMap<u32, f64> = BTreeMap::new();
        let mut total = 0.0f64;
        for (level, mass) in pdf.iter() {
            let w = max_pdf * ((mass - min_pdf) / spread).powf(alpha);
            total += w;
            weighted.insert(level, w);
        }
        if !(total > 0.0) || !total.is_finite() {
            return Err(AgcError::DegenerateInput(
                "weighted probability mass sums to zero".into(),
            ));
        }

        let mut running = 0.0f64;
        let mut values = BTreeMap::new();
        for (level, w) in weighted {
            running += w;
            values.insert(level, running);
        }
        // Single final normalization by the total weighted mass.
        for v in values.values_mut() {
            *v /= total;
        }
        Ok(Self {
            values,
            l_max: pdf.l_max(),
        })
    }

    /// Cumulative value at `level`, `None` if the level never occurs.
    #[inline]
    pub fn value(&self, level: u32) -> Option<f64> {
        self.values.get(&level).copied()
    }

    /// Largest observed level.
    #[inline]
    pub fn l_max(&self) -> u32 {
        self.l_max
    }

    /// Iterates `(level, cdf)` ascending by level.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.values.iter().map(|(&l, &v)| (l, v))
    }
}
