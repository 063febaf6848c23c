pub mod estimator;
pub mod trades;

pub use estimator::estimate;
pub use trades::{needed_trades, Trade};
