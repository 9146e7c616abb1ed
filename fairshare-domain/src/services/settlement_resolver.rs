use crate::model::{Balances, Money, ParticipantId, Transfer};

/// Tolerance below which a balance is treated as settled.
///
/// Balances are exact integer cents, so there is no floating-point
/// noise to absorb and the tolerance is zero: any nonzero balance is
/// an outstanding debt or credit.
pub const SETTLEMENT_EPSILON: Money = Money::ZERO;

/// Settlement resolution service.
///
/// Greedy largest-magnitude matching: the most indebted participant
/// always pays the most owed one. This does not guarantee the
/// theoretical minimum number of transfers (that is NP-hard in
/// general) but it is the documented behavior, tie-break included,
/// so results are reproducible.
pub struct SettlementResolver;

impl SettlementResolver {
    /// Produces the transfers that zero out the given balance map.
    ///
    /// A balance map whose total is nonzero indicates an upstream
    /// invariant violation. It is logged and left as residue, never
    /// silently corrected; conservation is asserted by the property
    /// suite instead.
    pub fn resolve(balances: &Balances) -> Vec<Transfer> {
        let total: Money = balances.values().copied().sum();
        if total.abs() > SETTLEMENT_EPSILON {
            tracing::error!(
                total = %total,
                participant_count = balances.len(),
                "Balance map does not sum to zero; settlement will leave residue"
            );
        }

        // Balances iterates in ascending id order, so partitions keep
        // a stable order and ties resolve to the lowest id.
        let mut debtors: Vec<(ParticipantId, Money)> = Vec::new();
        let mut creditors: Vec<(ParticipantId, Money)> = Vec::new();
        for (&id, &balance) in balances {
            if balance < -SETTLEMENT_EPSILON {
                debtors.push((id, balance));
            } else if balance > SETTLEMENT_EPSILON {
                creditors.push((id, balance));
            }
        }

        let mut transfers = Vec::new();
        while !debtors.is_empty() && !creditors.is_empty() {
            let debtor_idx = index_of_extreme(&debtors, |a, b| a < b);
            let creditor_idx = index_of_extreme(&creditors, |a, b| a > b);

            let (debtor_id, debtor_balance) = debtors[debtor_idx];
            let (creditor_id, creditor_balance) = creditors[creditor_idx];
            let amount = debtor_balance.abs().min(creditor_balance);

            transfers.push(Transfer {
                from_id: debtor_id,
                to_id: creditor_id,
                amount,
            });

            debtors[debtor_idx].1 += amount;
            creditors[creditor_idx].1 -= amount;

            if debtors[debtor_idx].1 >= -SETTLEMENT_EPSILON {
                debtors.remove(debtor_idx);
            }
            if creditors[creditor_idx].1 <= SETTLEMENT_EPSILON {
                creditors.remove(creditor_idx);
            }
        }

        transfers
    }
}

/// Index of the first entry winning the strict comparison; earlier
/// entries win exact ties, which keeps output deterministic.
fn index_of_extreme<F>(entries: &[(ParticipantId, Money)], wins: F) -> usize
where
    F: Fn(Money, Money) -> bool,
{
    let mut best = 0;
    for (idx, &(_, balance)) in entries.iter().enumerate().skip(1) {
        if wins(balance, entries[best].1) {
            best = idx;
        }
    }
    best
}
