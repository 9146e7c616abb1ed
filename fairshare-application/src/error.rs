use fairshare_domain::{ExpenseId, Money, ParticipantId};

/// Validation failures for ledger mutations.
///
/// The engine itself assumes validated input; everything a user could
/// get wrong is rejected here, before the snapshot changes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("participant name must not be blank")]
    BlankParticipantName,
    #[error("unknown participant {0}")]
    UnknownParticipant(ParticipantId),
    #[error("participant {0} is part of existing expenses")]
    ParticipantInUse(ParticipantId),
    #[error("unknown expense {0}")]
    UnknownExpense(ExpenseId),
    #[error("expense description must not be blank")]
    BlankDescription,
    #[error("expense amount must be positive, got {0}")]
    NonPositiveAmount(Money),
    #[error("expense must involve at least one participant")]
    EmptyInvolvedSet,
}
