// src/presentation/http/controllers/mod.rs
pub mod forms;
pub mod submissions;
