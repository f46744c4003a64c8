pub mod find;
pub mod generate;
pub mod score;
pub mod solve;
