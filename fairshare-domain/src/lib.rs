#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Balances, Category, Expense, ExpenseId, Money, MoneyConversionError, Participant,
    ParticipantId, SettlementSummary, Transfer,
};
pub use services::{BalanceCalculator, SettlementResolver, SETTLEMENT_EPSILON};
