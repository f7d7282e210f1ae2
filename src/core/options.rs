//! Options bundle for an analysis run
//!
//! [`AnalysisOptions`] carries the two injected strategies and an
//! [`AnalysisConfig`]. Strategies are optional at the type level so that an
//! incomplete bundle is rejected by the pipeline entry check rather than
//! silently filled in.

use crate::core::ranker::DEFAULT_TOP_PRODUCTS_LIMIT;
use crate::strategy::{BonusByProfit, BonusStrategy, RevenueStrategy, SimpleRevenue};
use tracing::warn;

/// Tunable limits of the ranking stage
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Number of entries kept in each seller's top products
    pub top_products_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
        }
    }
}

impl AnalysisConfig {
    /// Create a config, falling back to the default for a zero limit
    pub fn new(top_products_limit: usize) -> Self {
        let default = Self::default();

        let top_products_limit = if top_products_limit == 0 {
            warn!(
                "Invalid top_products_limit ({}), using default ({})",
                top_products_limit, default.top_products_limit
            );
            default.top_products_limit
        } else {
            top_products_limit
        };

        Self { top_products_limit }
    }
}

/// Strategies and configuration for one analysis run
pub struct AnalysisOptions {
    pub calculate_revenue: Option<Box<dyn RevenueStrategy>>,
    pub calculate_bonus: Option<Box<dyn BonusStrategy>>,
    pub config: AnalysisConfig,
}

impl Default for AnalysisOptions {
    /// [`SimpleRevenue`] and [`BonusByProfit`] with the default config
    fn default() -> Self {
        Self::new(SimpleRevenue, BonusByProfit)
    }
}

impl AnalysisOptions {
    pub fn new<R, B>(revenue: R, bonus: B) -> Self
    where
        R: RevenueStrategy + 'static,
        B: BonusStrategy + 'static,
    {
        AnalysisOptions {
            calculate_revenue: Some(Box::new(revenue)),
            calculate_bonus: Some(Box::new(bonus)),
            config: AnalysisConfig::default(),
        }
    }

    /// A bundle with no strategies; fails the entry check until both are set
    pub fn empty() -> Self {
        AnalysisOptions {
            calculate_revenue: None,
            calculate_bonus: None,
            config: AnalysisConfig::default(),
        }
    }

    pub fn with_revenue<R: RevenueStrategy + 'static>(mut self, revenue: R) -> Self {
        self.calculate_revenue = Some(Box::new(revenue));
        self
    }

    pub fn with_bonus<B: BonusStrategy + 'static>(mut self, bonus: B) -> Self {
        self.calculate_bonus = Some(Box::new(bonus));
        self
    }

    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }
}

impl std::fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::custom(3, 3)]
    #[case::default_value(10, 10)]
    #[case::zero_falls_back(0, DEFAULT_TOP_PRODUCTS_LIMIT)]
    fn test_config_new(#[case] limit: usize, #[case] expected: usize) {
        assert_eq!(AnalysisConfig::new(limit).top_products_limit, expected);
    }

    #[test]
    fn test_default_options_supply_both_strategies() {
        let options = AnalysisOptions::default();
        assert!(options.calculate_revenue.is_some());
        assert!(options.calculate_bonus.is_some());
        assert_eq!(options.config, AnalysisConfig::default());
    }

    #[test]
    fn test_empty_then_builders() {
        let options = AnalysisOptions::empty();
        assert!(options.calculate_revenue.is_none());
        assert!(options.calculate_bonus.is_none());

        let options = options
            .with_revenue(SimpleRevenue)
            .with_bonus(BonusByProfit)
            .with_config(AnalysisConfig::new(5));
        assert!(options.calculate_revenue.is_some());
        assert!(options.calculate_bonus.is_some());
        assert_eq!(options.config.top_products_limit, 5);
    }

    #[test]
    fn test_debug_hides_strategies() {
        let rendered = format!("{:?}", AnalysisOptions::empty());
        assert!(rendered.contains("calculate_revenue: false"));
    }
}
