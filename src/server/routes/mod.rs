pub mod chat;
pub mod pages;
pub mod upload;
