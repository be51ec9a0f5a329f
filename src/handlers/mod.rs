pub mod auth_handlers;
pub mod meeting_handlers;
pub mod token_handlers;
