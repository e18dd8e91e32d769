pub mod agent;
pub mod config;
pub mod draw_attempt;
pub mod lottery;
pub mod ticket_pool;

pub use agent::*;
pub use config::*;
pub use draw_attempt::*;
pub use lottery::*;
pub use ticket_pool::*;
