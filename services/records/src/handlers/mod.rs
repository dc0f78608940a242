pub mod health;
pub mod record;
pub mod reset;
pub mod student;
