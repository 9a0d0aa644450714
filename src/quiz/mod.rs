pub mod engine;
pub mod pool;
