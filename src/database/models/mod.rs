pub mod client;
pub mod user;

pub use client::{Client, PaymentStatus};
pub use user::User;
