//! Server-rendered HTML pages

pub mod dto;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod mapper;
pub mod routes;
pub mod session;
pub mod views;
