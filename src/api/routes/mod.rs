pub mod compare;
pub mod health;
pub mod score;
