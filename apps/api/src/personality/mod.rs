pub mod assessment;
pub mod handlers;
