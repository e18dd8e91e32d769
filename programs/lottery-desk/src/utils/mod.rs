pub mod draw;
pub mod randomness;
pub mod ticket_id;
pub mod validation;
