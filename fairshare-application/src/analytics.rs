use std::collections::BTreeMap;

use fairshare_domain::{Category, Expense, Money, ParticipantId};
use serde::Serialize;

/// Spending aggregation for the analytics view.
///
/// Pure recomputation over the expense list, like the settlement
/// summary; chart rendering is the collaborator's concern.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SpendingReport {
    /// Total per category; every category is present, zero when unused.
    pub category_totals: BTreeMap<Category, Money>,
    /// Total paid out per payer.
    pub payer_totals: BTreeMap<ParticipantId, Money>,
}

impl SpendingReport {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut category_totals: BTreeMap<Category, Money> = Category::ALL
            .iter()
            .map(|&category| (category, Money::ZERO))
            .collect();
        let mut payer_totals: BTreeMap<ParticipantId, Money> = BTreeMap::new();

        for expense in expenses {
            *category_totals
                .entry(expense.category)
                .or_insert(Money::ZERO) += expense.amount;
            *payer_totals
                .entry(expense.payer_id)
                .or_insert(Money::ZERO) += expense.amount;
        }

        Self {
            category_totals,
            payer_totals,
        }
    }

    pub fn total_spent(&self) -> Money {
        self.category_totals.values().copied().sum()
    }

    /// The payer with the largest total; earlier ids win exact ties.
    pub fn top_spender(&self) -> Option<(ParticipantId, Money)> {
        let mut best: Option<(ParticipantId, Money)> = None;
        for (&id, &total) in &self.payer_totals {
            match best {
                Some((_, top)) if total <= top => {}
                _ => best = Some((id, total)),
            }
        }
        best
    }

    /// The category with the largest total, or `None` with no spending.
    pub fn top_category(&self) -> Option<(Category, Money)> {
        let mut best: Option<(Category, Money)> = None;
        for (&category, &total) in &self.category_totals {
            if total.is_zero() {
                continue;
            }
            match best {
                Some((_, top)) if total <= top => {}
                _ => best = Some((category, total)),
            }
        }
        best
    }
}
