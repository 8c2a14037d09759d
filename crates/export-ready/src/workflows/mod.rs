pub mod export_check;
pub mod reports;
