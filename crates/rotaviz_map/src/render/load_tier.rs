/// How loaded a vehicle is on its route, which decides the route's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTier {
    /// No known vehicle or no usable capacity
    Unrated,
    Bottleneck,
    Attention,
    Healthy,
    Empty,
}

impl LoadTier {
    pub fn color(&self) -> &'static str {
        match self {
            LoadTier::Unrated => "#3388ff",
            LoadTier::Bottleneck => "red",
            LoadTier::Attention => "orange",
            LoadTier::Healthy => "#008000",
            LoadTier::Empty => "#888",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadTier::Unrated => "unrated",
            LoadTier::Bottleneck => "bottleneck",
            LoadTier::Attention => "attention",
            LoadTier::Healthy => "healthy",
            LoadTier::Empty => "empty route",
        }
    }
}

pub struct TierRule {
    /// The rule matches when utilization is strictly greater than this.
    pub above: f64,
    pub tier: LoadTier,
}

/// Evaluated top to bottom, first match wins. Anything left is [`LoadTier::Empty`].
pub const LOAD_TIER_RULES: [TierRule; 3] = [
    TierRule {
        above: 0.9,
        tier: LoadTier::Bottleneck,
    },
    TierRule {
        above: 0.7,
        tier: LoadTier::Attention,
    },
    TierRule {
        above: 0.0,
        tier: LoadTier::Healthy,
    },
];

/// Ratio of the route volume to the vehicle capacity, None without a positive capacity.
pub fn utilization(total_volume: f64, capacity: Option<f64>) -> Option<f64> {
    capacity
        .filter(|capacity| *capacity > 0.0)
        .map(|capacity| total_volume / capacity)
}

pub fn classify_utilization(utilization: f64) -> LoadTier {
    LOAD_TIER_RULES
        .iter()
        .find(|rule| utilization > rule.above)
        .map(|rule| rule.tier)
        .unwrap_or(LoadTier::Empty)
}

pub fn classify(total_volume: f64, capacity: Option<f64>) -> LoadTier {
    match utilization(total_volume, capacity) {
        Some(utilization) => classify_utilization(utilization),
        None => LoadTier::Unrated,
    }
}
