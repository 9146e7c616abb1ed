use chrono::{TimeZone, Utc};
use fairshare_domain::{
    BalanceCalculator, Category, Expense, ExpenseId, Money, Participant, ParticipantId,
    SettlementResolver, SETTLEMENT_EPSILON,
};
use proptest::prelude::*;
use uuid::Uuid;

fn pid(n: usize) -> ParticipantId {
    ParticipantId(Uuid::from_u128(n as u128 + 1))
}

fn participants(count: usize) -> Vec<Participant> {
    (0..count)
        .map(|idx| Participant {
            id: pid(idx),
            name: format!("P{idx}"),
        })
        .collect()
}

fn expense(
    index: usize,
    amount_cents: i64,
    payer_idx: usize,
    involved_mask: usize,
    member_count: usize,
) -> Expense {
    let involved_ids: Vec<ParticipantId> = (0..member_count)
        .filter(|idx| involved_mask & (1 << idx) != 0)
        .map(pid)
        .collect();

    Expense {
        id: ExpenseId(Uuid::from_u128(index as u128 + 10_000)),
        description: format!("expense {index}"),
        amount: Money::from_cents(amount_cents),
        category: Category::Other,
        payer_id: pid(payer_idx),
        involved_ids,
        date: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    }
}

proptest! {
    #[test]
    fn balances_sum_to_zero(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(1i64..=100_000, 0..=25),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=25),
        involved_masks in prop::collection::vec(1usize..=63, 0..=25),
    ) {
        let participants = participants(member_count);
        let expenses: Vec<Expense> = amounts
            .iter()
            .enumerate()
            .map(|(idx, &amount)| {
                let payer = payer_indexes.get(idx).copied().unwrap_or(0) % member_count;
                let raw_mask = involved_masks.get(idx).copied().unwrap_or(1);
                let mask = raw_mask & ((1 << member_count) - 1);
                let mask = if mask == 0 { 1 } else { mask };
                expense(idx, amount, payer, mask, member_count)
            })
            .collect();

        let balances = BalanceCalculator::calculate(&participants, &expenses);

        prop_assert_eq!(balances.len(), member_count);
        let total: i64 = balances.values().map(|balance| balance.cents()).sum();
        prop_assert_eq!(total, 0);
    }

    #[test]
    fn settlements_zero_balances_and_are_well_formed(
        member_count in 2usize..=6,
        amounts in prop::collection::vec(1i64..=100_000, 1..=25),
        payer_indexes in prop::collection::vec(0usize..=5, 1..=25),
        involved_masks in prop::collection::vec(1usize..=63, 1..=25),
    ) {
        let participants = participants(member_count);
        let expenses: Vec<Expense> = amounts
            .iter()
            .enumerate()
            .map(|(idx, &amount)| {
                let payer = payer_indexes.get(idx).copied().unwrap_or(0) % member_count;
                let raw_mask = involved_masks.get(idx).copied().unwrap_or(1);
                let mask = raw_mask & ((1 << member_count) - 1);
                let mask = if mask == 0 { 1 } else { mask };
                expense(idx, amount, payer, mask, member_count)
            })
            .collect();

        let balances = BalanceCalculator::calculate(&participants, &expenses);
        let transfers = SettlementResolver::resolve(&balances);

        let total_transferred: Money = transfers.iter().map(|transfer| transfer.amount).sum();
        let total_debt: Money = balances
            .values()
            .filter(|balance| **balance < -SETTLEMENT_EPSILON)
            .map(|balance| balance.abs())
            .sum();
        prop_assert_eq!(total_transferred, total_debt);

        let mut remaining = balances;
        for transfer in &transfers {
            prop_assert!(transfer.amount > Money::ZERO);
            prop_assert_ne!(transfer.from_id, transfer.to_id);

            if let Some(balance) = remaining.get_mut(&transfer.from_id) {
                *balance += transfer.amount;
            }
            if let Some(balance) = remaining.get_mut(&transfer.to_id) {
                *balance -= transfer.amount;
            }
        }

        for balance in remaining.values() {
            prop_assert!(balance.abs() <= SETTLEMENT_EPSILON);
        }
    }

    #[test]
    fn resolution_is_deterministic(
        member_count in 2usize..=6,
        amounts in prop::collection::vec(1i64..=100_000, 1..=15),
        payer_indexes in prop::collection::vec(0usize..=5, 1..=15),
        involved_masks in prop::collection::vec(1usize..=63, 1..=15),
    ) {
        let participants = participants(member_count);
        let expenses: Vec<Expense> = amounts
            .iter()
            .enumerate()
            .map(|(idx, &amount)| {
                let payer = payer_indexes.get(idx).copied().unwrap_or(0) % member_count;
                let raw_mask = involved_masks.get(idx).copied().unwrap_or(1);
                let mask = raw_mask & ((1 << member_count) - 1);
                let mask = if mask == 0 { 1 } else { mask };
                expense(idx, amount, payer, mask, member_count)
            })
            .collect();

        let first = BalanceCalculator::calculate(&participants, &expenses);
        let second = BalanceCalculator::calculate(&participants, &expenses);
        prop_assert_eq!(&first, &second);

        prop_assert_eq!(
            SettlementResolver::resolve(&first),
            SettlementResolver::resolve(&second)
        );
    }
}
