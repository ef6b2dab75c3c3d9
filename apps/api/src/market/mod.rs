pub mod handlers;
pub mod insights;
pub mod job_market;
pub mod learning;
pub mod skills_analysis;
pub mod trends;
