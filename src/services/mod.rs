pub mod insights;
pub mod recommendations;
pub mod roadmap;
