#[derive(Debug, Copy, Clone)]
pub struct MeansSampleSize {
    pub effect_size: f64,
    pub n_per_group: usize,
    pub n_total: usize,
}
