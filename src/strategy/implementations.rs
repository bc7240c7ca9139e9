// src/strategy/implementations.rs

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{InventoryError, InventoryResult};
use crate::model::params::OrderModelParameters;
use crate::model::validation::{require_exceeds, require_fraction, require_positive};
use crate::strategy::observer::{CalculationObserver, SilentObserver};
use crate::strategy::optimization::{
    annual_cost, backorder_eoq, backorder_level, basic_eoq, discount_total_cost, evaluate_tiers,
    production_eoq, production_level, sawtooth_level, select_cheapest, DiscountTier,
    TierEvaluation,
};
use crate::strategy::traits::{DiscountedOrder, InventoryModel, OrderQuantity};

// =========================================================================
// 1. Basic EOQ
// =========================================================================

/// Instant replenishment, no shortages, single price.
#[derive(Debug, Clone)]
pub struct BasicEoq {
    params: OrderModelParameters,
}

impl BasicEoq {
    pub fn new(params: OrderModelParameters) -> Self {
        Self { params }
    }

    pub fn calculate_eoq(&self) -> f64 {
        basic_eoq(
            self.params.demand_rate(),
            self.params.ordering_cost(),
            self.params.holding_cost(),
        )
    }

    /// Yearly ordering + holding cost when ordering `quantity` each cycle.
    pub fn total_annual_cost(&self, quantity: f64) -> f64 {
        let p = &self.params;
        annual_cost(p.demand_rate(), p.ordering_cost(), p.holding_cost(), quantity, quantity / 2.0)
    }

    /// Cycle length T = Q* / D, in years.
    pub fn cycle_length(&self) -> f64 {
        self.calculate_eoq() / self.params.demand_rate()
    }
}

impl InventoryModel for BasicEoq {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn parameters(&self) -> &OrderModelParameters {
        &self.params
    }

    fn solve(&self, observer: &mut dyn CalculationObserver) -> InventoryResult<OrderQuantity> {
        observer.begin(self.name());
        observer.record("demand_rate", self.params.demand_rate());
        observer.record("ordering_cost", self.params.ordering_cost());
        observer.record("holding_cost", self.params.holding_cost());

        let eoq = self.calculate_eoq();
        observer.record("eoq", eoq);
        Ok(OrderQuantity::Single(eoq))
    }

    fn level_at(&self, t: f64) -> f64 {
        sawtooth_level(self.calculate_eoq(), self.params.demand_rate(), t)
    }
}

// =========================================================================
// 2. Production-constrained EOQ (EPQ)
// =========================================================================

/// Stock replenishes gradually at `production_rate` while demand keeps drawing it down.
#[derive(Debug, Clone)]
pub struct ProductionEoq {
    params: OrderModelParameters,
    production_rate: f64,
}

impl ProductionEoq {
    /// Fails unless `production_rate > demand_rate`.
    pub fn new(params: OrderModelParameters, production_rate: f64) -> InventoryResult<Self> {
        let production_rate = require_positive("production_rate", production_rate)?;
        require_exceeds(
            "production_rate",
            production_rate,
            params.demand_rate(),
            "must exceed demand_rate",
        )?;
        Ok(Self {
            params,
            production_rate,
        })
    }

    pub fn production_rate(&self) -> f64 {
        self.production_rate
    }

    pub fn calculate_eoq(&self) -> f64 {
        production_eoq(
            self.params.demand_rate(),
            self.params.ordering_cost(),
            self.params.holding_cost(),
            self.production_rate,
        )
    }

    /// Peak stock, reached when the production run ends: Q * (1 - D / P).
    pub fn max_inventory(&self) -> f64 {
        self.calculate_eoq() * (1.0 - self.params.demand_rate() / self.production_rate)
    }

    /// Length of the production run Q / P, in years.
    pub fn production_phase_length(&self) -> f64 {
        self.calculate_eoq() / self.production_rate
    }

    pub fn total_annual_cost(&self, quantity: f64) -> f64 {
        let p = &self.params;
        let peak = quantity * (1.0 - p.demand_rate() / self.production_rate);
        annual_cost(p.demand_rate(), p.ordering_cost(), p.holding_cost(), quantity, peak / 2.0)
    }
}

impl InventoryModel for ProductionEoq {
    fn name(&self) -> &'static str {
        "production"
    }

    fn parameters(&self) -> &OrderModelParameters {
        &self.params
    }

    fn solve(&self, observer: &mut dyn CalculationObserver) -> InventoryResult<OrderQuantity> {
        observer.begin(self.name());
        observer.record("demand_rate", self.params.demand_rate());
        observer.record("ordering_cost", self.params.ordering_cost());
        observer.record("holding_cost", self.params.holding_cost());
        observer.record("production_rate", self.production_rate);

        let epq = self.calculate_eoq();
        observer.record("epq", epq);
        Ok(OrderQuantity::Single(epq))
    }

    fn level_at(&self, t: f64) -> f64 {
        production_level(
            self.calculate_eoq(),
            self.params.demand_rate(),
            self.production_rate,
            t,
        )
    }
}

// =========================================================================
// 3. Quantity-discount EOQ
// =========================================================================

/// Price breaks by order size. The schedule is copied in and never shared.
#[derive(Debug, Clone)]
pub struct DiscountEoq {
    params: OrderModelParameters,
    tiers: Vec<DiscountTier>,
    // Written once in `new`; feeds the inventory curve.
    optimum: DiscountedOrder,
}

impl DiscountEoq {
    /// # Arguments
    /// * `params` - Base economics; `price` is the undiscounted unit price.
    /// * `schedule` - `(min_quantity, discount_rate)` pairs, rates in `[0, 1)`.
    ///
    /// A `0 -> 0.0` tier is added when no tier starts at zero.
    pub fn new<I>(params: OrderModelParameters, schedule: I) -> InventoryResult<Self>
    where
        I: IntoIterator<Item = (u64, f64)>,
    {
        let mut sorted = BTreeMap::new();
        for (breakpoint, rate) in schedule {
            sorted.insert(breakpoint, require_fraction("discount_rate", rate)?);
        }
        if sorted.is_empty() {
            return Err(InventoryError::invalid(
                "discount_schedule",
                "must contain at least one tier",
                0.0,
            ));
        }
        sorted.entry(0).or_insert(0.0);

        let tiers: Vec<DiscountTier> = sorted
            .into_iter()
            .map(|(breakpoint, rate)| DiscountTier { breakpoint, rate })
            .collect();

        let mut model = Self {
            params,
            tiers,
            optimum: DiscountedOrder {
                best_quantity: 0.0,
                min_total_cost: f64::INFINITY,
                unit_price: 0.0,
            },
        };
        model.optimum = model.calculate_eoq(&mut SilentObserver)?;
        Ok(model)
    }

    /// Tiers sorted by breakpoint, always starting at 0.
    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }

    /// The optimum found at construction.
    pub fn optimum(&self) -> DiscountedOrder {
        self.optimum
    }

    /// Every tier priced at its clamped quantity.
    pub fn evaluate_tiers(&self) -> Vec<TierEvaluation> {
        evaluate_tiers(
            &self.tiers,
            self.params.price(),
            self.params.demand_rate(),
            self.params.ordering_cost(),
            self.params.holding_rate(),
        )
    }

    /// Total yearly cost of ordering `quantity` at `unit_price`.
    pub fn total_cost(&self, quantity: f64, unit_price: f64) -> f64 {
        discount_total_cost(
            self.params.demand_rate(),
            self.params.ordering_cost(),
            self.params.holding_rate(),
            quantity,
            unit_price,
        )
    }

    /// Exhaustive per-tier search for the cheapest order quantity.
    pub fn calculate_eoq(
        &self,
        observer: &mut dyn CalculationObserver,
    ) -> InventoryResult<DiscountedOrder> {
        observer.begin("discount");
        let evaluations = self.evaluate_tiers();
        let count = evaluations.len();

        for (i, eval) in evaluations.iter().enumerate() {
            observer.note(&format!("tier {} of {}", i + 1, count));
            observer.record("min_quantity", eval.tier.breakpoint as f64);
            observer.record("discount_rate", eval.tier.rate);
            observer.record("unit_price", eval.unit_price);
            observer.record("max_quantity", eval.max_quantity);
            observer.record("candidate_eoq", eval.unconstrained_quantity);
            observer.record("order_quantity", eval.order_quantity);
            observer.record("total_cost", eval.total_cost);
        }

        let best = select_cheapest(&evaluations).ok_or_else(|| {
            InventoryError::invalid(
                "discount_schedule",
                "no tier yields a finite total cost",
                count as f64,
            )
        })?;
        observer.note(&format!("selected tier starting at {}", best.tier.breakpoint));
        observer.record("best_quantity", best.order_quantity);

        Ok(DiscountedOrder {
            best_quantity: best.order_quantity,
            min_total_cost: best.total_cost,
            unit_price: best.unit_price,
        })
    }
}

impl InventoryModel for DiscountEoq {
    fn name(&self) -> &'static str {
        "discount"
    }

    fn parameters(&self) -> &OrderModelParameters {
        &self.params
    }

    fn solve(&self, observer: &mut dyn CalculationObserver) -> InventoryResult<OrderQuantity> {
        self.calculate_eoq(observer).map(OrderQuantity::Discounted)
    }

    fn level_at(&self, t: f64) -> f64 {
        sawtooth_level(self.optimum.best_quantity, self.params.demand_rate(), t)
    }
}

// =========================================================================
// 4. Backorder EOQ (planned shortages)
// =========================================================================

/// Per-cycle figures of the backorder model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CycleMetrics {
    pub optimal_quantity: f64,
    pub max_inventory: f64,
    pub max_backorder: f64,
    pub total_annual_cost: f64,
}

/// Shortages are allowed and filled from the next delivery at `shortage_cost`
/// per unit per year.
#[derive(Debug, Clone)]
pub struct BackorderEoq {
    params: OrderModelParameters,
    shortage_cost: f64,
}

impl BackorderEoq {
    pub fn new(params: OrderModelParameters, shortage_cost: f64) -> InventoryResult<Self> {
        let shortage_cost = require_positive("shortage_cost", shortage_cost)?;
        Ok(Self {
            params,
            shortage_cost,
        })
    }

    pub fn shortage_cost(&self) -> f64 {
        self.shortage_cost
    }

    pub fn calculate_eoq(&self) -> f64 {
        backorder_eoq(
            self.params.demand_rate(),
            self.params.ordering_cost(),
            self.params.holding_cost(),
            self.shortage_cost,
        )
    }

    /// # Formula
    /// - MaxInventory = P / (H + P) * Q*
    /// - MaxBackorder = H / (H + P) * Q*
    /// - TC = D * S / Q* + H * MaxInventory^2 / (2 Q*) + P * MaxBackorder^2 / (2 Q*)
    pub fn cycle_metrics(&self) -> CycleMetrics {
        let d = self.params.demand_rate();
        let s = self.params.ordering_cost();
        let h = self.params.holding_cost();
        let p = self.shortage_cost;

        let q = self.calculate_eoq();
        let max_inventory = (p / (h + p)) * q;
        let max_backorder = (h / (h + p)) * q;
        let total_annual_cost = (d * s / q)
            + (h * max_inventory.powi(2) / (2.0 * q))
            + (p * max_backorder.powi(2) / (2.0 * q));

        CycleMetrics {
            optimal_quantity: q,
            max_inventory,
            max_backorder,
            total_annual_cost,
        }
    }
}

impl InventoryModel for BackorderEoq {
    fn name(&self) -> &'static str {
        "backorder"
    }

    fn parameters(&self) -> &OrderModelParameters {
        &self.params
    }

    fn solve(&self, observer: &mut dyn CalculationObserver) -> InventoryResult<OrderQuantity> {
        observer.begin(self.name());
        observer.record("demand_rate", self.params.demand_rate());
        observer.record("ordering_cost", self.params.ordering_cost());
        observer.record("holding_cost", self.params.holding_cost());
        observer.record("shortage_cost", self.shortage_cost);

        let q = self.calculate_eoq();
        observer.record("q_opt", q);
        Ok(OrderQuantity::Single(q))
    }

    fn level_at(&self, t: f64) -> f64 {
        let metrics = self.cycle_metrics();
        backorder_level(
            metrics.optimal_quantity,
            self.params.demand_rate(),
            metrics.max_inventory,
            t,
        )
    }
}
