// src/model/params.rs

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};
use crate::model::validation::{require_non_negative, require_positive};

/// Holding rate used when the caller does not supply one.
pub const DEFAULT_HOLDING_RATE: f64 = 0.25;

/// Operating days per year; also the day -> year-fraction divisor for curves.
pub const DEFAULT_DAYS_OF_OPERATION: f64 = 365.0;

/// Economic inputs shared by every order-quantity model.
///
/// Immutable once built. `holding_cost` is derived as `price * holding_rate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderModelParameters {
    price: f64,
    demand_rate: f64,
    ordering_cost: f64,
    holding_rate: f64,
    holding_cost: f64,
    lead_time: Option<f64>,
}

impl OrderModelParameters {
    /// # Arguments
    /// * `price` - Unit purchase price.
    /// * `demand_rate` - Annual demand (D).
    /// * `ordering_cost` - Fixed cost per order (S).
    /// * `holding_rate` - Yearly holding cost as a fraction of price.
    pub fn new(
        price: f64,
        demand_rate: f64,
        ordering_cost: f64,
        holding_rate: f64,
    ) -> InventoryResult<Self> {
        let price = require_positive("price", price)?;
        let demand_rate = require_positive("demand_rate", demand_rate)?;
        let ordering_cost = require_positive("ordering_cost", ordering_cost)?;
        let holding_rate = require_positive("holding_rate", holding_rate)?;

        // Each factor can be valid while the product overflows or underflows.
        let holding_cost = price * holding_rate;
        if !holding_cost.is_finite() || holding_cost <= 0.0 {
            return Err(InventoryError::invalid(
                "holding_rate",
                "price * holding_rate must be finite and > 0",
                holding_cost,
            ));
        }

        Ok(Self {
            price,
            demand_rate,
            ordering_cost,
            holding_rate,
            holding_cost,
            lead_time: None,
        })
    }

    pub fn with_default_holding_rate(
        price: f64,
        demand_rate: f64,
        ordering_cost: f64,
    ) -> InventoryResult<Self> {
        Self::new(price, demand_rate, ordering_cost, DEFAULT_HOLDING_RATE)
    }

    /// Stores a lead time (days) used by [`OrderModelParameters::stored_reorder_point`].
    pub fn with_lead_time(mut self, lead_time: f64) -> InventoryResult<Self> {
        self.lead_time = Some(require_non_negative("lead_time", lead_time)?);
        Ok(self)
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn demand_rate(&self) -> f64 {
        self.demand_rate
    }

    pub fn ordering_cost(&self) -> f64 {
        self.ordering_cost
    }

    pub fn holding_rate(&self) -> f64 {
        self.holding_rate
    }

    pub fn holding_cost(&self) -> f64 {
        self.holding_cost
    }

    pub fn lead_time(&self) -> Option<f64> {
        self.lead_time
    }

    /// Reorder Point (ROP).
    ///
    /// # Formula
    /// ROP = (DemandRate / DaysOfOperation) * LeadTime + SafetyStock
    pub fn reorder_point(&self, config: &LeadTimeConfig) -> InventoryResult<f64> {
        config.validate()?;
        let daily_demand = self.demand_rate / config.days_of_operation;
        Ok(daily_demand * config.lead_time + config.safety_stock)
    }

    /// ROP for the lead time given at construction, with default safety stock
    /// and operating days. `None` when no lead time was stored.
    pub fn stored_reorder_point(&self) -> Option<InventoryResult<f64>> {
        self.lead_time
            .map(|lead_time| self.reorder_point(&LeadTimeConfig::new(lead_time)))
    }
}

/// Per-call reorder point inputs. Not part of model identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadTimeConfig {
    /// Days between placing and receiving an order.
    pub lead_time: f64,
    pub safety_stock: f64,
    pub days_of_operation: f64,
}

impl LeadTimeConfig {
    pub fn new(lead_time: f64) -> Self {
        Self {
            lead_time,
            ..Self::default()
        }
    }

    pub fn with_safety_stock(mut self, safety_stock: f64) -> Self {
        self.safety_stock = safety_stock;
        self
    }

    pub fn with_days_of_operation(mut self, days_of_operation: f64) -> Self {
        self.days_of_operation = days_of_operation;
        self
    }

    pub fn validate(&self) -> InventoryResult<()> {
        require_non_negative("lead_time", self.lead_time)?;
        require_non_negative("safety_stock", self.safety_stock)?;
        require_positive("days_of_operation", self.days_of_operation)?;
        Ok(())
    }
}

impl Default for LeadTimeConfig {
    fn default() -> Self {
        Self {
            lead_time: 0.0,
            safety_stock: 0.0,
            days_of_operation: DEFAULT_DAYS_OF_OPERATION,
        }
    }
}
