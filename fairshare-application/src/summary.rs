use fairshare_domain::{
    BalanceCalculator, Expense, Money, Participant, SettlementResolver, SettlementSummary,
};

/// Computes the full settlement summary for one snapshot.
///
/// This is the composed entry point collaborators use: balances,
/// the greedy transfer plan, and the grand total, recomputed from
/// scratch on every call. Inputs are never mutated and the result is
/// deterministic for identical snapshots.
pub fn compute_settlement_summary(
    participants: &[Participant],
    expenses: &[Expense],
) -> SettlementSummary {
    let balances = BalanceCalculator::calculate(participants, expenses);
    let settlements = SettlementResolver::resolve(&balances);
    let total_spent: Money = expenses.iter().map(|expense| expense.amount).sum();

    tracing::debug!(
        participant_count = participants.len(),
        expense_count = expenses.len(),
        settlement_count = settlements.len(),
        total_spent = %total_spent,
        "Computed settlement summary"
    );

    SettlementSummary {
        total_spent,
        settlements,
        balances,
    }
}
