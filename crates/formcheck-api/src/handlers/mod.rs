pub mod exercise_analysis;
pub mod root;
