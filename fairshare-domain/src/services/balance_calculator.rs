use fxhash::FxHashSet;

use crate::model::{Balances, Expense, Money, Participant, ParticipantId};

/// Balance calculation service.
///
/// Reduces a set of expenses into one net balance per participant:
/// `balance = (total paid as payer) - (total share owed)`.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Computes net balances for the given participant snapshot.
    ///
    /// Every participant gets an entry, initialized to zero. Expense
    /// references to ids outside the snapshot contribute nothing and
    /// are logged rather than raised: a single bad record must not
    /// break summary generation.
    pub fn calculate(participants: &[Participant], expenses: &[Expense]) -> Balances {
        let mut balances: Balances = participants
            .iter()
            .map(|participant| (participant.id, Money::ZERO))
            .collect();

        for expense in expenses {
            Self::apply(&mut balances, expense);
        }

        balances
    }

    fn apply(balances: &mut Balances, expense: &Expense) {
        let involved = dedup_sorted(&expense.involved_ids);
        if involved.is_empty() {
            return;
        }

        // The payer is credited the full amount even when not involved:
        // they lent the whole expense.
        match balances.get_mut(&expense.payer_id) {
            Some(balance) => *balance += expense.amount,
            None => tracing::warn!(
                expense_id = %expense.id,
                payer_id = %expense.payer_id,
                "Expense payer is not a known participant; skipping credit"
            ),
        }

        let total_cents = expense.amount.cents();
        let share_count = involved.len() as i64;
        let base = total_cents / share_count;
        let remainder = (total_cents % share_count).unsigned_abs() as usize;

        // Leftover cents go one each to the first participants in
        // ascending-id order, so shares reconstruct the amount exactly.
        for (idx, id) in involved.iter().enumerate() {
            let mut share = base;
            if idx < remainder {
                share += 1;
            }
            match balances.get_mut(id) {
                Some(balance) => *balance -= Money::from_cents(share),
                None => tracing::warn!(
                    expense_id = %expense.id,
                    participant_id = %id,
                    "Involved participant is not in the snapshot; skipping debit"
                ),
            }
        }
    }
}

/// Deduplicates involved ids into a deterministic ascending order;
/// the caller's list order carries no meaning.
fn dedup_sorted(ids: &[ParticipantId]) -> Vec<ParticipantId> {
    let unique: FxHashSet<ParticipantId> = ids.iter().copied().collect();
    let mut sorted: Vec<ParticipantId> = unique.into_iter().collect();
    sorted.sort_unstable();
    sorted
}
