// src/analysis/engine.rs

use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::config::AnalysisConfig;
use crate::analysis::curve::{CurveSample, InventoryCurve};
use crate::error::InventoryResult;
use crate::strategy::traits::{InventoryModel, OrderQuantity};

/// One summary row per model, flat so it can go straight to CSV.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRecord {
    pub model: String,
    pub order_quantity: f64,
    /// Only the discount model reports a total cost and unit price.
    pub total_cost: Option<f64>,
    pub unit_price: Option<f64>,
    pub reorder_point: f64,
}

/// Everything computed for one model.
#[derive(Debug, Clone)]
pub struct ModelReport {
    pub summary: SummaryRecord,
    pub order: OrderQuantity,
    pub curve: Vec<CurveSample>,
}

/// Runs the same analysis over a set of models.
pub struct InventoryAnalysis {
    config: AnalysisConfig,
    pub models: Vec<Box<dyn InventoryModel>>,
}

impl InventoryAnalysis {
    pub fn new(config: AnalysisConfig, models: Vec<Box<dyn InventoryModel>>) -> InventoryResult<Self> {
        config.validate()?;
        Ok(Self { config, models })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn run(&self) -> InventoryResult<Vec<ModelReport>> {
        self.models
            .iter()
            .map(|model| self.analyse(model.as_ref()))
            .collect()
    }

    fn analyse(&self, model: &dyn InventoryModel) -> InventoryResult<ModelReport> {
        let order = model.calculate_order_quantity(self.config.verbose)?;
        let reorder_point = model.reorder_point(&self.config.reorder)?;

        let curve: Vec<CurveSample> = InventoryCurve::new(model, self.config.step_days)
            .take(self.config.sample_count())
            .collect();
        debug!(model = model.name(), samples = curve.len(), "sampled inventory curve");

        let (total_cost, unit_price) = match order {
            OrderQuantity::Single(_) => (None, None),
            OrderQuantity::Discounted(d) => (Some(d.min_total_cost), Some(d.unit_price)),
        };

        info!(
            model = model.name(),
            order_quantity = order.quantity(),
            reorder_point,
            "analysis complete"
        );

        Ok(ModelReport {
            summary: SummaryRecord {
                model: model.name().to_string(),
                order_quantity: order.quantity(),
                total_cost,
                unit_price,
                reorder_point,
            },
            order,
            curve,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::params::OrderModelParameters;
    use crate::strategy::implementations::{BackorderEoq, BasicEoq, DiscountEoq};

    fn models() -> Vec<Box<dyn InventoryModel>> {
        let base = OrderModelParameters::new(10.0, 1000.0, 50.0, 0.2).unwrap();
        vec![
            Box::new(BasicEoq::new(base.clone())),
            Box::new(DiscountEoq::new(base.clone(), [(100, 0.05)]).unwrap()),
            Box::new(BackorderEoq::new(base, 20.0).unwrap()),
        ]
    }

    #[test]
    fn reports_one_entry_per_model() {
        let config = AnalysisConfig {
            horizon_days: 120.0,
            ..AnalysisConfig::default()
        };
        let reports = InventoryAnalysis::new(config, models()).unwrap().run().unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].summary.model, "basic");
        assert_eq!(reports[0].curve.len(), 121);
        assert!(reports[0].summary.total_cost.is_none());
        assert!(reports[1].summary.total_cost.is_some());
        assert!(reports[2].curve.iter().any(|s| s.level < 0.0));
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = AnalysisConfig {
            horizon_days: -1.0,
            ..AnalysisConfig::default()
        };
        assert!(InventoryAnalysis::new(config, models()).is_err());
    }
}
