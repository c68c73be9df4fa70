// src/domain/form/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod slug;
pub mod value_objects;

pub use entity::{Form, FormPublication, NewForm};
pub use repository::{FormReadRepository, FormWriteRepository};
pub use slug::{SlugOracle, allocate_unique, canonicalize};
pub use value_objects::{FormId, FormName, FormSlug, FormStatus, Question, Questions};
