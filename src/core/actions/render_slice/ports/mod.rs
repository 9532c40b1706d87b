pub mod colour_policy;
pub mod escape_time_algorithm;
