pub mod analyst;
pub mod feed;
pub mod report;
pub mod shared;

pub use analyst::AnalystView;
pub use feed::FeedView;
pub use report::ReportFormView;
