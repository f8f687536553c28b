#[derive(Debug, Clone, Copy)]
pub struct PowerSimSettings {
    pub seed: u64,
    pub mean_a: f64,
    pub mean_b: f64,
    pub sd_approx: f64,
    pub n_per_group: usize,
    pub reps: usize,
    pub alpha: f64,
}

impl Default for PowerSimSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            mean_a: 8.0,
            mean_b: 10.0,
            sd_approx: 6.0,
            n_per_group: 200,
            reps: 3000,
            alpha: 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WelchTTest {
    pub t: f64,
    pub df: f64,
    pub p_value: f64,
}
