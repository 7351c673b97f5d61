pub mod horizon;
pub mod lot;
pub mod percentage;
pub mod price;
pub mod projection;

pub use horizon::{Horizon, MAX_PROJECTION_DAYS};
pub use lot::{LotSize, SHARES_PER_LOT};
pub use percentage::Percentage;
pub use price::Price;
pub use projection::{DayProjection, SimulationResult};
