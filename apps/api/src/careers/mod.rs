pub mod handlers;
pub mod path;
pub mod prediction;
pub mod recommend;
