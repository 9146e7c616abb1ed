use chrono::Utc;
use fairshare_domain::{
    Category, Expense, ExpenseId, Money, Participant, ParticipantId, SettlementSummary,
};
use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::{analytics::SpendingReport, error::LedgerError, summary::compute_settlement_summary};

/// Expense data as entered by a user, before validation and stamping.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: Money,
    pub category: Category,
    pub payer_id: ParticipantId,
    pub involved_ids: Vec<ParticipantId>,
}

/// The participant/expense snapshot the engine computes over.
///
/// All mutations validate their input up front, and deserialization
/// re-runs the same checks on the raw snapshot, so anything stored
/// here satisfies the engine's invariants: every referenced id
/// resolves, amounts are positive, involved sets are non-empty.
/// Derived values (balances, settlements, reports) are recomputed
/// from scratch on demand, never cached.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LedgerSnapshot")]
pub struct Ledger {
    participants: Vec<Participant>,
    expenses: Vec<Expense>,
}

/// Raw persisted shape of a ledger, before any invariant has been
/// checked. Promoted to a `Ledger` only through validation.
#[derive(Deserialize)]
struct LedgerSnapshot {
    participants: Vec<Participant>,
    expenses: Vec<Expense>,
}

impl TryFrom<LedgerSnapshot> for Ledger {
    type Error = LedgerError;

    fn try_from(snapshot: LedgerSnapshot) -> Result<Self, Self::Error> {
        let LedgerSnapshot {
            participants,
            expenses,
        } = snapshot;

        if participants.iter().any(|p| p.name.trim().is_empty()) {
            return Err(LedgerError::BlankParticipantName);
        }

        let known: FxHashSet<ParticipantId> = participants.iter().map(|p| p.id).collect();
        for expense in &expenses {
            validate_expense(
                &known,
                &expense.description,
                expense.amount,
                expense.payer_id,
                &expense.involved_ids,
            )?;
        }

        Ok(Self {
            participants,
            expenses,
        })
    }
}

fn validate_expense(
    known: &FxHashSet<ParticipantId>,
    description: &str,
    amount: Money,
    payer_id: ParticipantId,
    involved_ids: &[ParticipantId],
) -> Result<(), LedgerError> {
    if description.trim().is_empty() {
        return Err(LedgerError::BlankDescription);
    }
    if amount <= Money::ZERO {
        return Err(LedgerError::NonPositiveAmount(amount));
    }
    if involved_ids.is_empty() {
        return Err(LedgerError::EmptyInvolvedSet);
    }
    if !known.contains(&payer_id) {
        return Err(LedgerError::UnknownParticipant(payer_id));
    }
    if let Some(&unknown) = involved_ids
        .iter()
        .find(|involved| !known.contains(involved))
    {
        return Err(LedgerError::UnknownParticipant(unknown));
    }
    Ok(())
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn add_participant(&mut self, name: impl Into<String>) -> Result<ParticipantId, LedgerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LedgerError::BlankParticipantName);
        }

        let id = ParticipantId::new();
        self.participants.push(Participant { id, name });
        Ok(id)
    }

    /// Removes a participant, rejected while any expense references them.
    pub fn remove_participant(&mut self, id: ParticipantId) -> Result<(), LedgerError> {
        if !self.participants.iter().any(|p| p.id == id) {
            return Err(LedgerError::UnknownParticipant(id));
        }
        let referenced = self
            .expenses
            .iter()
            .any(|e| e.payer_id == id || e.involved_ids.contains(&id));
        if referenced {
            return Err(LedgerError::ParticipantInUse(id));
        }

        self.participants.retain(|p| p.id != id);
        Ok(())
    }

    /// Validates a draft, stamps id and date, and records the expense.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<ExpenseId, LedgerError> {
        let known: FxHashSet<ParticipantId> = self.participants.iter().map(|p| p.id).collect();
        validate_expense(
            &known,
            &draft.description,
            draft.amount,
            draft.payer_id,
            &draft.involved_ids,
        )?;

        let id = ExpenseId::new();
        self.expenses.push(Expense {
            id,
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            payer_id: draft.payer_id,
            involved_ids: draft.involved_ids,
            date: Utc::now(),
        });
        Ok(id)
    }

    pub fn remove_expense(&mut self, id: ExpenseId) -> Result<(), LedgerError> {
        if !self.expenses.iter().any(|e| e.id == id) {
            return Err(LedgerError::UnknownExpense(id));
        }
        self.expenses.retain(|e| e.id != id);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.participants.clear();
        self.expenses.clear();
    }

    pub fn settlement_summary(&self) -> SettlementSummary {
        compute_settlement_summary(&self.participants, &self.expenses)
    }

    pub fn spending_report(&self) -> SpendingReport {
        SpendingReport::from_expenses(&self.expenses)
    }
}
