#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl ChartSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone)]
pub struct ReportProfile {
    pub threshold: u8,
    pub threshold_min: u8,
    pub threshold_max: u8,
    pub histogram_bins: usize,
    pub kde_points: usize,
    pub performance_size: ChartSize,
    pub cognitive_size: ChartSize,
    pub traits_size: ChartSize,
    pub trend_size: ChartSize,
    pub iq_size: ChartSize,
    pub trait_axis_max: f64,
}

impl ReportProfile {
    pub fn default_v1() -> Self {
        Self {
            threshold: 80,
            threshold_min: 0,
            threshold_max: 100,
            histogram_bins: 10,
            kde_points: 200,
            performance_size: ChartSize::new(1500, 400),
            cognitive_size: ChartSize::new(1500, 500),
            traits_size: ChartSize::new(800, 500),
            trend_size: ChartSize::new(1000, 500),
            iq_size: ChartSize::new(800, 400),
            trait_axis_max: 100.0,
        }
    }

    pub fn with_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins.max(1);
        self
    }
}
