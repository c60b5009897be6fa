pub mod baseline;
mod mode;
mod powertrain;
pub mod scenario;
mod unit_basis;

pub use mode::Mode;
pub use powertrain::Powertrain;
pub use unit_basis::UnitBasis;
