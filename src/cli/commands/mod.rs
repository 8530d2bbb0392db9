//! One module per CLI command

pub mod curves;
pub mod q_learning;
pub mod random;
pub mod value_iteration;
