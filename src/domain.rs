pub mod daylight;
pub mod intervals;
pub mod localtime;
pub mod oracle;
pub mod thresholds;
pub mod weather;
