// Domain layer - Sprint records and the models derived from them
pub mod chart;
pub mod filter;
pub mod sprint;
pub mod summary;
pub mod table;
