//! Stock detection for the target product page.

mod checker;
pub mod detection;

pub use checker::{HttpStockChecker, StockChecker};
pub use detection::{StockDetector, StockSignals};
