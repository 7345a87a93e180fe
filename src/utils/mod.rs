pub mod guid;
pub mod time;
