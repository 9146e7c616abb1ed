use fairshare_domain::Category;

pub const SUMMARY_TITLE: &str = "FairShare Settlement";
pub const TOTAL_SPENT: &str = "Total spent";
pub const ALL_SETTLED: &str = "All settled up! No one owes anything.";
pub const UNKNOWN_PARTICIPANT: &str = "Unknown";
pub const CURRENCY_SYMBOL: &str = "\u{20b9}";

pub const PARTICIPANT: &str = "Participant";
pub const BALANCE: &str = "Balance";

pub const SPENDING_BY_CATEGORY: &str = "Spending by category";
pub const TOP_SPENDER: &str = "Top spender";
pub const TOP_CATEGORY: &str = "Top category";

pub const SHARE_BASE_URL: &str = "https://wa.me/?text=";

/// Accent color per category, for collaborators that render charts or
/// badges. The engine itself never interprets these.
pub fn category_accent_hex(category: Category) -> &'static str {
    match category {
        Category::Food => "#f97316",
        Category::Travel => "#3b82f6",
        Category::Shopping => "#ec4899",
        Category::Course => "#6366f1",
        Category::Other => "#64748b",
    }
}
