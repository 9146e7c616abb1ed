use std::borrow::Cow;

use fairshare_application::ParticipantDirectory;
use fairshare_domain::{Balances, Expense, Money, ParticipantId, Transfer};

use crate::labels;

pub struct SummaryPresenter;

impl SummaryPresenter {
    /// Builds the message shared out of the app, one settlement per line.
    ///
    /// With no settlements the body is the all-settled line instead, so
    /// the shared text is never just a header.
    pub fn shareable_text(
        settlements: &[Transfer],
        expenses: &[Expense],
        directory: &dyn ParticipantDirectory,
    ) -> String {
        let total_spent: Money = expenses.iter().map(|expense| expense.amount).sum();

        let mut lines = Vec::with_capacity(settlements.len() + 3);
        lines.push(format!("*{}*", labels::SUMMARY_TITLE));
        lines.push(format!(
            "{}: {}{total_spent}",
            labels::TOTAL_SPENT,
            labels::CURRENCY_SYMBOL
        ));
        lines.push(String::new());

        if settlements.is_empty() {
            lines.push(labels::ALL_SETTLED.to_string());
        } else {
            for transfer in settlements {
                lines.push(format!(
                    "{} pays {}: {}{}",
                    format_participant_label(transfer.from_id, directory),
                    format_participant_label(transfer.to_id, directory),
                    labels::CURRENCY_SYMBOL,
                    transfer.amount
                ));
            }
        }

        lines.join("\n")
    }

    /// Plain-text balance table with the name column padded to align
    /// the amounts. Positive balances carry an explicit `+`.
    pub fn balance_table(balances: &Balances, directory: &dyn ParticipantDirectory) -> String {
        let rows: Vec<(Cow<'_, str>, String)> = balances
            .iter()
            .map(|(&id, &balance)| {
                let sign = if balance >= Money::ZERO { "+" } else { "" };
                (
                    format_participant_label(id, directory),
                    format!("{sign}{balance}"),
                )
            })
            .collect();

        let name_width = rows
            .iter()
            .map(|(name, _)| name.chars().count())
            .chain(std::iter::once(labels::PARTICIPANT.chars().count()))
            .max()
            .unwrap_or(0);

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(format!(
            "{:<name_width$}  {}",
            labels::PARTICIPANT,
            labels::BALANCE
        ));
        for (name, balance) in rows {
            lines.push(format!("{name:<name_width$}  {balance}"));
        }

        lines.join("\n")
    }
}

/// WhatsApp share link carrying the percent-encoded summary text.
pub fn share_url(text: &str) -> String {
    format!("{}{}", labels::SHARE_BASE_URL, urlencoding::encode(text))
}

pub(crate) fn format_participant_label<'a>(
    id: ParticipantId,
    directory: &'a dyn ParticipantDirectory,
) -> Cow<'a, str> {
    match directory.display_name(id) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Borrowed(labels::UNKNOWN_PARTICIPANT),
    }
}
