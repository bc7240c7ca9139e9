// src/strategy/traits.rs

use serde::Serialize;
use std::fmt::Debug;

use crate::error::InventoryResult;
use crate::model::params::{LeadTimeConfig, OrderModelParameters, DEFAULT_DAYS_OF_OPERATION};
use crate::strategy::observer::{CalculationObserver, SilentObserver, TracingObserver};

/// Optimum of the quantity-discount search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscountedOrder {
    pub best_quantity: f64,
    pub min_total_cost: f64,
    /// Discounted unit price of the winning tier.
    pub unit_price: f64,
}

/// What an order-quantity calculation returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum OrderQuantity {
    /// Q* of the basic, production and backorder models.
    Single(f64),
    Discounted(DiscountedOrder),
}

impl OrderQuantity {
    /// The quantity to order, whichever model produced it.
    pub fn quantity(&self) -> f64 {
        match self {
            OrderQuantity::Single(q) => *q,
            OrderQuantity::Discounted(order) => order.best_quantity,
        }
    }
}

/// Shared surface of every inventory model variant.
///
/// We require `Debug` so models can be logged.
/// We require `Send` + `Sync` so one model can be queried from several threads.
pub trait InventoryModel: Debug + Send + Sync {
    /// Short model name used in traces and exports.
    fn name(&self) -> &'static str;

    fn parameters(&self) -> &OrderModelParameters;

    /// Runs the order-quantity calculation, reporting intermediate values to
    /// `observer`. The observer never influences the result.
    fn solve(&self, observer: &mut dyn CalculationObserver) -> InventoryResult<OrderQuantity>;

    /// On-hand inventory `t` years into the replenishment cycle.
    fn level_at(&self, t: f64) -> f64;

    /// Order quantity; `verbose` sends the trace to `tracing`.
    fn calculate_order_quantity(&self, verbose: bool) -> InventoryResult<OrderQuantity> {
        if verbose {
            self.solve(&mut TracingObserver::default())
        } else {
            self.solve(&mut SilentObserver)
        }
    }

    fn reorder_point(&self, config: &LeadTimeConfig) -> InventoryResult<f64> {
        self.parameters().reorder_point(config)
    }

    /// On-hand inventory on `day`, normalized to a year fraction.
    fn inventory_level(&self, day: f64) -> f64 {
        self.level_at(day / DEFAULT_DAYS_OF_OPERATION)
    }
}
