/// Equal-width histogram normalized to a probability density.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityHistogram {
    pub start: f64,
    pub bin_width: f64,
    pub densities: Vec<f64>,
}

impl DensityHistogram {
    /// Bin `samples` into `bins` equal-width buckets spanning their range.
    ///
    /// The last bucket is closed on the right so the maximum sample is
    /// counted. A zero-width range is widened by half a point each way.
    /// Returns `None` for no samples or zero bins.
    pub fn from_samples(samples: &[f64], bins: usize) -> Option<Self> {
        if samples.is_empty() || bins == 0 {
            return None;
        }

        let (mut lo, mut hi) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        if hi - lo <= f64::EPSILON {
            lo -= 0.5;
            hi += 0.5;
        }

        let bin_width = (hi - lo) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &x in samples {
            let idx = (((x - lo) / bin_width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let norm = samples.len() as f64 * bin_width;
        Some(DensityHistogram {
            start: lo,
            bin_width,
            densities: counts.into_iter().map(|c| c as f64 / norm).collect(),
        })
    }

    pub fn end(&self) -> f64 {
        self.start + self.bin_width * self.densities.len() as f64
    }

    pub fn max_density(&self) -> f64 {
        self.densities.iter().copied().fold(0.0, f64::max)
    }

    /// Iterate `(left_edge, right_edge, density)` per bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.densities.iter().enumerate().map(move |(i, &d)| {
            let left = self.start + self.bin_width * i as f64;
            (left, left + self.bin_width, d)
        })
    }
}
