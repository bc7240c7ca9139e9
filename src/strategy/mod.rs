pub mod implementations;
pub mod observer;
pub mod optimization;
pub mod traits;
