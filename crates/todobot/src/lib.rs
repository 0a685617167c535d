pub mod cmd;
pub mod config;
pub mod gateway;
pub mod invocation;
pub mod scheduler;
pub mod store;
