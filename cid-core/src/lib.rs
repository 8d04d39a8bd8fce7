pub mod continent;
pub mod error;
pub mod indicator;
