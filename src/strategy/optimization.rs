// src/strategy/optimization.rs

//! Closed-form EOQ formulas and the quantity-discount tier search.
//!
//! Everything here is a pure function of its arguments. Time arguments are
//! year fractions, the same unit as the annual demand rate.

use serde::Serialize;

/// Classic Economic Order Quantity.
///
/// # Formula
/// Q* = sqrt(2 * D * S / H)
///
/// A holding cost of exactly zero has no finite optimum; this returns
/// `f64::INFINITY` instead of failing.
pub fn basic_eoq(demand_rate: f64, ordering_cost: f64, holding_cost: f64) -> f64 {
    if holding_cost == 0.0 {
        return f64::INFINITY;
    }
    (2.0 * demand_rate * ordering_cost / holding_cost).sqrt()
}

/// Economic Production Quantity (finite replenishment rate `P`).
///
/// # Formula
/// Q* = sqrt((2 * D * S / H) * (P / (P - D)))
pub fn production_eoq(
    demand_rate: f64,
    ordering_cost: f64,
    holding_cost: f64,
    production_rate: f64,
) -> f64 {
    let base = 2.0 * demand_rate * ordering_cost / holding_cost;
    (base * (production_rate / (production_rate - demand_rate))).sqrt()
}

/// EOQ with planned backorders at shortage cost `P` per unit per year.
///
/// # Formula
/// Q* = sqrt(2 * D * S * (H + P) / (H * P))
pub fn backorder_eoq(
    demand_rate: f64,
    ordering_cost: f64,
    holding_cost: f64,
    shortage_cost: f64,
) -> f64 {
    ((2.0 * demand_rate * ordering_cost * (holding_cost + shortage_cost))
        / (holding_cost * shortage_cost))
        .sqrt()
}

/// Yearly ordering + holding cost of ordering `quantity` at a time,
/// with `average_inventory` units on hand on average.
pub fn annual_cost(
    demand_rate: f64,
    ordering_cost: f64,
    holding_cost: f64,
    quantity: f64,
    average_inventory: f64,
) -> f64 {
    (demand_rate / quantity) * ordering_cost + average_inventory * holding_cost
}

/// Total yearly cost under discount pricing.
///
/// # Formula
/// TC = D * UnitPrice + (D / Q) * S + (Q / 2) * (UnitPrice * HoldingRate)
///
/// Quantities that are not strictly positive and finite cannot be ordered;
/// their cost is `f64::INFINITY` so they never win a comparison.
pub fn discount_total_cost(
    demand_rate: f64,
    ordering_cost: f64,
    holding_rate: f64,
    quantity: f64,
    unit_price: f64,
) -> f64 {
    if !quantity.is_finite() || quantity <= 0.0 {
        return f64::INFINITY;
    }
    let purchase = demand_rate * unit_price;
    let ordering = (demand_rate / quantity) * ordering_cost;
    let holding = (quantity / 2.0) * (unit_price * holding_rate);
    purchase + ordering + holding
}

/// A single price break: orders of at least `breakpoint` units get `rate` off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscountTier {
    pub breakpoint: u64,
    pub rate: f64,
}

/// The outcome of pricing one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierEvaluation {
    pub tier: DiscountTier,
    pub unit_price: f64,
    pub holding_cost: f64,
    /// Largest quantity still priced in this tier (next breakpoint - 1).
    pub max_quantity: f64,
    /// EOQ at this tier's price, ignoring the tier bounds.
    pub unconstrained_quantity: f64,
    /// `unconstrained_quantity` clamped to `[breakpoint, max_quantity]`.
    pub order_quantity: f64,
    pub total_cost: f64,
}

/// Prices every tier of an ascending schedule.
///
/// For tier `i`:
/// - UnitPrice = Price * (1 - Rate)
/// - H = UnitPrice * HoldingRate
/// - QMax = NextBreakpoint - 1, or infinity for the last tier
/// - Q = clamp(sqrt(2DS / H), Breakpoint, QMax)
///
/// A non-positive `H` has an unbounded optimum, so the tier's upper bound is
/// taken. On the last tier that bound is infinite and the tier prices at
/// `f64::INFINITY`.
pub fn evaluate_tiers(
    tiers: &[DiscountTier],
    price: f64,
    demand_rate: f64,
    ordering_cost: f64,
    holding_rate: f64,
) -> Vec<TierEvaluation> {
    tiers
        .iter()
        .enumerate()
        .map(|(i, tier)| {
            let unit_price = price * (1.0 - tier.rate);
            let holding_cost = unit_price * holding_rate;

            let max_quantity = match tiers.get(i + 1) {
                Some(next) => next.breakpoint.saturating_sub(1) as f64,
                None => f64::INFINITY,
            };

            let unconstrained_quantity = if holding_cost <= 0.0 {
                f64::INFINITY
            } else {
                (2.0 * demand_rate * ordering_cost / holding_cost).sqrt()
            };

            let min_quantity = tier.breakpoint as f64;
            let order_quantity = if unconstrained_quantity > max_quantity {
                max_quantity
            } else if unconstrained_quantity < min_quantity {
                min_quantity
            } else {
                unconstrained_quantity
            };

            let total_cost = discount_total_cost(
                demand_rate,
                ordering_cost,
                holding_rate,
                order_quantity,
                unit_price,
            );

            TierEvaluation {
                tier: *tier,
                unit_price,
                holding_cost,
                max_quantity,
                unconstrained_quantity,
                order_quantity,
                total_cost,
            }
        })
        .collect()
}

/// Picks the cheapest finite-cost tier. A later tier must be strictly cheaper
/// to displace an earlier one, so the first tier wins ties.
pub fn select_cheapest(evaluations: &[TierEvaluation]) -> Option<&TierEvaluation> {
    let mut best: Option<&TierEvaluation> = None;
    for eval in evaluations {
        if !eval.total_cost.is_finite() {
            continue;
        }
        match best {
            Some(current) if eval.total_cost >= current.total_cost => {}
            _ => best = Some(eval),
        }
    }
    best
}

// =========================================================================
// Inventory level curves
// =========================================================================
// `t` is a year fraction. Negative `t` wraps into the cycle like positive `t`.

/// Instant-replenishment sawtooth: Q - D * (t mod T), T = Q / D.
pub fn sawtooth_level(quantity: f64, demand_rate: f64, t: f64) -> f64 {
    let cycle = quantity / demand_rate;
    quantity - demand_rate * t.rem_euclid(cycle)
}

/// Production ramp then linear depletion.
///
/// Stock builds at `P - D` until `Q / P`, peaking at `Q * (1 - D / P)`,
/// then drains at `D` until the cycle ends at `Q / D`.
pub fn production_level(quantity: f64, demand_rate: f64, production_rate: f64, t: f64) -> f64 {
    let cycle = quantity / demand_rate;
    let in_cycle = t.rem_euclid(cycle);
    let production_end = quantity / production_rate;

    if in_cycle <= production_end {
        (production_rate - demand_rate) * in_cycle
    } else {
        let max_inventory = quantity * (1.0 - demand_rate / production_rate);
        max_inventory - demand_rate * (in_cycle - production_end)
    }
}

/// Depletion from `max_inventory` to zero, then backorders accumulating.
///
/// Negative values are outstanding backorders.
pub fn backorder_level(quantity: f64, demand_rate: f64, max_inventory: f64, t: f64) -> f64 {
    let cycle = quantity / demand_rate;
    let in_cycle = t.rem_euclid(cycle);
    let inventory_phase_end = max_inventory / demand_rate;

    if in_cycle <= inventory_phase_end {
        max_inventory - demand_rate * in_cycle
    } else {
        -demand_rate * (in_cycle - inventory_phase_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seed_tiers() -> Vec<DiscountTier> {
        vec![
            DiscountTier { breakpoint: 0, rate: 0.0 },
            DiscountTier { breakpoint: 500, rate: 0.05 },
            DiscountTier { breakpoint: 1200, rate: 0.10 },
        ]
    }

    #[test]
    fn basic_eoq_matches_hand_calculation() {
        assert_relative_eq!(basic_eoq(1200.0, 50.0, 2.0), 60000f64.sqrt(), max_relative = 1e-12);
        assert_relative_eq!(basic_eoq(1200.0, 50.0, 2.0), 244.948974, max_relative = 1e-6);
    }

    #[test]
    fn zero_holding_cost_is_unbounded() {
        assert_eq!(basic_eoq(1000.0, 10.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn production_quantity_exceeds_basic() {
        let basic = basic_eoq(500.0, 40.0, 3.0);
        let epq = production_eoq(500.0, 40.0, 3.0, 1000.0);
        assert_relative_eq!(epq, basic * 2f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn discount_total_cost_components() {
        // 14.25 * 1000 + 1000/500 * 40 + 250 * 3.5625
        let cost = discount_total_cost(1000.0, 40.0, 0.25, 500.0, 14.25);
        assert_relative_eq!(cost, 15220.625, max_relative = 1e-12);
    }

    #[test]
    fn discount_total_cost_rejects_empty_orders() {
        assert_eq!(discount_total_cost(1000.0, 40.0, 0.25, 0.0, 10.0), f64::INFINITY);
        assert_eq!(
            discount_total_cost(1000.0, 40.0, 0.25, f64::INFINITY, 10.0),
            f64::INFINITY
        );
    }

    #[test]
    fn tiers_clamp_to_their_bounds() {
        let evals = evaluate_tiers(&seed_tiers(), 15.0, 1000.0, 40.0, 0.25);
        assert_eq!(evals.len(), 3);

        // Tier 0: interior optimum.
        assert_eq!(evals[0].max_quantity, 499.0);
        assert_relative_eq!(evals[0].order_quantity, (80000.0f64 / 3.75).sqrt(), max_relative = 1e-12);

        // Tiers 1 and 2: optimum below the breakpoint, pushed up to it.
        assert_eq!(evals[1].max_quantity, 1199.0);
        assert_eq!(evals[1].order_quantity, 500.0);
        assert_eq!(evals[2].max_quantity, f64::INFINITY);
        assert_eq!(evals[2].order_quantity, 1200.0);
    }

    #[test]
    fn cheapest_tier_is_the_500_break() {
        let evals = evaluate_tiers(&seed_tiers(), 15.0, 1000.0, 40.0, 0.25);
        let best = select_cheapest(&evals).unwrap();
        assert_eq!(best.tier.breakpoint, 500);
        assert_eq!(best.order_quantity, 500.0);
        assert_relative_eq!(best.unit_price, 14.25, max_relative = 1e-12);
        assert_relative_eq!(best.total_cost, 15220.625, max_relative = 1e-12);
    }

    #[test]
    fn upper_bound_clamp_when_optimum_overshoots() {
        // EOQ at full price is ~447, but tier 0 stops at 99.
        let tiers = vec![
            DiscountTier { breakpoint: 0, rate: 0.0 },
            DiscountTier { breakpoint: 100, rate: 0.01 },
        ];
        let evals = evaluate_tiers(&tiers, 1.0, 1000.0, 25.0, 0.25);
        assert_eq!(evals[0].order_quantity, 99.0);
        assert!(evals[1].order_quantity > 100.0);
    }

    #[test]
    fn ties_keep_the_first_tier() {
        let evals = evaluate_tiers(&seed_tiers(), 15.0, 1000.0, 40.0, 0.25);
        let mut tied = evals.clone();
        tied[2].total_cost = tied[1].total_cost;
        assert_eq!(select_cheapest(&tied).unwrap().tier.breakpoint, 500);
    }

    #[test]
    fn infinite_costs_are_never_selected() {
        let evals = evaluate_tiers(&seed_tiers(), 15.0, 1000.0, 40.0, 0.25);
        let mut blocked = evals.clone();
        for eval in &mut blocked {
            eval.total_cost = f64::INFINITY;
        }
        assert!(select_cheapest(&blocked).is_none());
    }

    #[test]
    fn sawtooth_restarts_each_cycle() {
        let q = 100.0;
        let d = 1000.0;
        assert_relative_eq!(sawtooth_level(q, d, 0.0), 100.0);
        assert_relative_eq!(sawtooth_level(q, d, 0.05), 50.0, max_relative = 1e-9);
        assert_relative_eq!(sawtooth_level(q, d, 0.1), 100.0, max_relative = 1e-9);
        assert_relative_eq!(sawtooth_level(q, d, 0.15), 50.0, max_relative = 1e-9);
    }

    #[test]
    fn production_peak_at_phase_boundary() {
        let (q, d, p) = (200.0, 500.0, 1000.0);
        let boundary = q / p;
        let peak = q * (1.0 - d / p);
        assert_relative_eq!(production_level(q, d, p, boundary), peak, max_relative = 1e-12);
        let after = production_level(q, d, p, boundary + 1e-9);
        assert!((after - peak).abs() < 1e-5);
    }

    #[test]
    fn backorder_goes_negative_after_stock_runs_out() {
        let (q, d, s_max) = (300.0, 1500.0, 200.0);
        assert_relative_eq!(backorder_level(q, d, s_max, 0.0), 200.0);
        let t_empty = s_max / d;
        assert!(backorder_level(q, d, s_max, t_empty).abs() < 1e-9);
        let just_before_end = q / d - 1e-9;
        assert_relative_eq!(
            backorder_level(q, d, s_max, just_before_end),
            -(q - s_max),
            max_relative = 1e-5
        );
    }
}
