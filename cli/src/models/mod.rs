pub mod holiday;
