//! Request handlers.

pub mod amounts;
pub mod costs;
pub mod health;
pub mod jobs;
pub mod readings;
pub mod token;
pub mod users;
