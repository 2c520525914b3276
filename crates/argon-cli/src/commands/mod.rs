pub mod input;
pub mod read;
pub mod trace;
