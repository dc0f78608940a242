pub mod record;
pub mod reset;
pub mod seed;
pub mod student;
