//! Closed-form inventory models: EOQ, production-constrained EOQ (EPQ),
//! quantity-discount EOQ and EOQ with planned backorders, plus reorder points
//! and sampled inventory-level curves.

pub mod analysis;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod strategy;

pub use error::{InventoryError, InventoryResult};
pub use model::params::{LeadTimeConfig, OrderModelParameters};
pub use strategy::implementations::{BackorderEoq, BasicEoq, CycleMetrics, DiscountEoq, ProductionEoq};
pub use strategy::traits::{DiscountedOrder, InventoryModel, OrderQuantity};
