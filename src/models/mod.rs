//! Domain models and request/response types

pub mod author;
pub mod book;
pub mod pagination;
pub mod token;
