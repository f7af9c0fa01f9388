pub mod controller;
pub mod dto;
pub mod util;
