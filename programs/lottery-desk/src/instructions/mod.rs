pub mod admin;
pub mod book_ticket;
pub mod close_lottery;
pub mod commit_winners;
pub mod create_lottery;
pub mod manage_lottery;
pub mod manage_ticket;
pub mod reveal_winners;
pub mod start_draw;

pub use admin::*;
pub use book_ticket::*;
pub use close_lottery::*;
pub use commit_winners::*;
pub use create_lottery::*;
pub use manage_lottery::*;
pub use manage_ticket::*;
pub use reveal_winners::*;
pub use start_draw::*;
