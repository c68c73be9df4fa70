mod get_by_slug;
mod list_mine;
mod service;

pub use get_by_slug::GetFormBySlugQuery;
pub use service::FormQueryService;
