use rand::Rng;

/// Number of stars scattered across the header.
pub const HEADER_STAR_COUNT: usize = 20;

/// Placement and timing of one decorative star.
#[derive(Clone, Debug, PartialEq)]
pub struct StarVm {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_secs: f64,
    pub duration_secs: f64,
}

impl StarVm {
    /// Inline style for the star element.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left_pct, self.top_pct, self.delay_secs, self.duration_secs
        )
    }
}

/// Scatter `count` stars with random positions and twinkle timings.
pub fn scatter_stars<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<StarVm> {
    (0..count)
        .map(|_| StarVm {
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            delay_secs: rng.random_range(0.0..2.0),
            duration_secs: rng.random_range(1.0..3.0),
        })
        .collect()
}
