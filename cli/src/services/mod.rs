pub mod holiday_source;
pub mod next_holiday;
pub mod weekend;
