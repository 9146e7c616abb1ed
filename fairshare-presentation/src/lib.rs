#![warn(clippy::uninlined_format_args)]

pub mod labels;
pub mod report_presenter;
pub mod summary_presenter;

pub use report_presenter::ReportPresenter;
pub use summary_presenter::{share_url, SummaryPresenter};
