mod list;
mod service;

pub use list::ListSubmissionsQuery;
pub use service::SubmissionQueryService;
