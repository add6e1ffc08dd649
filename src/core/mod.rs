pub mod chart;
pub mod submit;
