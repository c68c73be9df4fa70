pub mod auth;
pub mod forms;
pub mod submissions;

pub use auth::AuthenticatedUser;
pub use forms::{CreateFormResultDto, FormDto, QuestionDto};
pub use submissions::SubmissionDto;
