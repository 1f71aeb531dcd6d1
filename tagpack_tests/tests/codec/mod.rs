pub mod random_records;
pub mod tape;
