pub mod params;
pub mod validation;
