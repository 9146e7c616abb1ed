use fairshare_application::{ParticipantDirectory, SpendingReport};

use crate::labels;
use crate::summary_presenter::format_participant_label;

pub struct ReportPresenter;

impl ReportPresenter {
    /// Renders the spending report as plain text. Categories with no
    /// spending are left out; insight lines appear only when there is
    /// at least one expense.
    pub fn render(report: &SpendingReport, directory: &dyn ParticipantDirectory) -> String {
        let mut lines = vec![format!("{}:", labels::SPENDING_BY_CATEGORY)];

        for (category, &total) in &report.category_totals {
            if total.is_zero() {
                continue;
            }
            lines.push(format!(
                "  {category}: {}{total}",
                labels::CURRENCY_SYMBOL
            ));
        }

        if let Some((id, total)) = report.top_spender() {
            lines.push(format!(
                "{}: {} ({}{total})",
                labels::TOP_SPENDER,
                format_participant_label(id, directory),
                labels::CURRENCY_SYMBOL
            ));
        }

        if let Some((category, total)) = report.top_category() {
            lines.push(format!(
                "{}: {category} ({}{total})",
                labels::TOP_CATEGORY,
                labels::CURRENCY_SYMBOL
            ));
        }

        lines.join("\n")
    }
}
