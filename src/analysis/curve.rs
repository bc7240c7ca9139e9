// src/analysis/curve.rs

use serde::Serialize;

use crate::strategy::traits::InventoryModel;

/// One point of an inventory curve. Negative levels are backorders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveSample {
    pub model: &'static str,
    pub day: f64,
    pub level: f64,
}

/// Lazy, infinite sampling of a model's inventory level every `step_days`.
///
/// Cloning or calling [`InventoryCurve::restart`] starts again from day 0.
#[derive(Debug, Clone)]
pub struct InventoryCurve<'a> {
    model: &'a dyn InventoryModel,
    step_days: f64,
    index: u64,
}

impl<'a> InventoryCurve<'a> {
    pub fn new(model: &'a dyn InventoryModel, step_days: f64) -> Self {
        Self {
            model,
            step_days,
            index: 0,
        }
    }

    pub fn restart(&mut self) {
        self.index = 0;
    }
}

impl Iterator for InventoryCurve<'_> {
    type Item = CurveSample;

    fn next(&mut self) -> Option<Self::Item> {
        // Day from the index, not an accumulator, so long runs don't drift.
        let day = self.index as f64 * self.step_days;
        self.index += 1;
        Some(CurveSample {
            model: self.model.name(),
            day,
            level: self.model.inventory_level(day),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::params::OrderModelParameters;
    use crate::strategy::implementations::BasicEoq;

    #[test]
    fn samples_follow_the_model() {
        let model = BasicEoq::new(OrderModelParameters::new(10.0, 1200.0, 50.0, 0.2).unwrap());
        let samples: Vec<CurveSample> = InventoryCurve::new(&model, 2.0).take(4).collect();

        assert_eq!(samples.len(), 4);
        assert_eq!(samples[3].day, 6.0);
        for sample in &samples {
            assert_eq!(sample.model, "basic");
            assert_eq!(sample.level, model.inventory_level(sample.day));
        }
    }

    #[test]
    fn restart_replays_the_same_sequence() {
        let model = BasicEoq::new(OrderModelParameters::new(10.0, 1200.0, 50.0, 0.2).unwrap());
        let mut curve = InventoryCurve::new(&model, 1.5);
        let first: Vec<CurveSample> = curve.by_ref().take(10).collect();
        curve.restart();
        let again: Vec<CurveSample> = curve.take(10).collect();
        assert_eq!(first, again);
    }
}
