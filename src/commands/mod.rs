pub mod generate;
pub mod themes;
