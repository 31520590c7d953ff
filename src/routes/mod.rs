pub mod health_check;
pub mod lists;
pub mod submissions;
