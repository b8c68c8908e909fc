pub mod export;
pub mod health;
pub mod info;
pub mod weather;
