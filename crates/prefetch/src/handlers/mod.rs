pub mod data;
pub mod error;
pub mod health;
pub mod layout;
pub mod pages;

pub use error::AppError;
