use crate::Rounding;

#[derive(Debug, Clone)]
pub struct RatingSystemBuilder {
    window_months: u32,
    fallback_window_months: u32,
    min_window_rounds: usize,

    min_outlier_rounds: usize,
    outlier_deviations: f64,
    outlier_points: f64,

    min_doubling_rounds: usize,
    doubled_fraction: f64,

    rounding: Rounding,
}

impl Default for RatingSystemBuilder {
    fn default() -> RatingSystemBuilder {
        RatingSystemBuilder::new()
    }
}

impl RatingSystemBuilder {
    /// Starts from the parameters documented in the PDGA Ratings System
    /// Guide.
    pub fn new() -> RatingSystemBuilder {
        RatingSystemBuilder {
            window_months: 12,
            fallback_window_months: 24,
            min_window_rounds: 8,

            min_outlier_rounds: 7,
            outlier_deviations: 2.5,
            outlier_points: 100.0,

            min_doubling_rounds: 9,
            doubled_fraction: 0.25,

            rounding: Rounding::HalfEven,
        }
    }

    pub fn window_months(&mut self, window_months: u32) -> &mut Self {
        self.window_months = window_months;
        self
    }

    pub fn fallback_window_months(&mut self, fallback_window_months: u32) -> &mut Self {
        self.fallback_window_months = fallback_window_months;
        self
    }

    pub fn min_window_rounds(&mut self, min_window_rounds: usize) -> &mut Self {
        self.min_window_rounds = min_window_rounds;
        self
    }

    pub fn min_outlier_rounds(&mut self, min_outlier_rounds: usize) -> &mut Self {
        self.min_outlier_rounds = min_outlier_rounds;
        self
    }

    pub fn outlier_deviations(&mut self, outlier_deviations: f64) -> &mut Self {
        assert!(outlier_deviations >= 0.0);
        self.outlier_deviations = outlier_deviations;
        self
    }

    pub fn outlier_points(&mut self, outlier_points: f64) -> &mut Self {
        assert!(outlier_points >= 0.0);
        self.outlier_points = outlier_points;
        self
    }

    pub fn min_doubling_rounds(&mut self, min_doubling_rounds: usize) -> &mut Self {
        self.min_doubling_rounds = min_doubling_rounds;
        self
    }

    pub fn doubled_fraction(&mut self, doubled_fraction: f64) -> &mut Self {
        assert!((0.0..=1.0).contains(&doubled_fraction));
        self.doubled_fraction = doubled_fraction;
        self
    }

    pub fn rounding(&mut self, rounding: Rounding) -> &mut Self {
        self.rounding = rounding;
        self
    }

    pub fn build(&self) -> RatingSystem {
        assert!(self.window_months <= self.fallback_window_months);

        RatingSystem {
            window_months: self.window_months,
            fallback_window_months: self.fallback_window_months,
            min_window_rounds: self.min_window_rounds,

            min_outlier_rounds: self.min_outlier_rounds,
            outlier_deviations: self.outlier_deviations,
            outlier_points: self.outlier_points,

            min_doubling_rounds: self.min_doubling_rounds,
            doubled_fraction: self.doubled_fraction,

            rounding: self.rounding,
        }
    }
}

/// Parameters of the rating calculation.
///
/// The stages of the calculation, [`RatingSystem::select`],
/// [`RatingSystem::filter_outliers`] and
/// [`RatingSystem::double_most_recent_quarter`], are tied together by
/// [`RatingSystem::update`].
#[derive(Debug, Clone)]
pub struct RatingSystem {
    pub(crate) window_months: u32,
    pub(crate) fallback_window_months: u32,
    pub(crate) min_window_rounds: usize,

    pub(crate) min_outlier_rounds: usize,
    pub(crate) outlier_deviations: f64,
    pub(crate) outlier_points: f64,

    pub(crate) min_doubling_rounds: usize,
    pub(crate) doubled_fraction: f64,

    pub(crate) rounding: Rounding,
}

impl Default for RatingSystem {
    fn default() -> RatingSystem {
        RatingSystem::new()
    }
}

impl RatingSystem {
    pub fn builder() -> RatingSystemBuilder {
        RatingSystemBuilder::default()
    }

    pub fn new() -> RatingSystem {
        RatingSystem::builder().build()
    }

    /// Rounds in the `window_months` before the reference date are included.
    pub fn window_months(&self) -> u32 {
        self.window_months
    }

    /// How far back the window may be extended to find `min_window_rounds`.
    pub fn fallback_window_months(&self) -> u32 {
        self.fallback_window_months
    }

    pub fn min_window_rounds(&self) -> usize {
        self.min_window_rounds
    }

    /// Outliers are only removed when at least this many rounds are
    /// available, and never below this many rounds.
    pub fn min_outlier_rounds(&self) -> usize {
        self.min_outlier_rounds
    }

    pub fn outlier_deviations(&self) -> f64 {
        self.outlier_deviations
    }

    pub fn outlier_points(&self) -> f64 {
        self.outlier_points
    }

    pub fn min_doubling_rounds(&self) -> usize {
        self.min_doubling_rounds
    }

    pub fn doubled_fraction(&self) -> f64 {
        self.doubled_fraction
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }
}
