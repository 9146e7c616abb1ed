pub mod balance_calculator;
pub mod settlement_resolver;

pub use balance_calculator::BalanceCalculator;
pub use settlement_resolver::{SettlementResolver, SETTLEMENT_EPSILON};
