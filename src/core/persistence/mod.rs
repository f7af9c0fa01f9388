pub mod entities;
pub mod memory;
pub mod selection;
pub mod store;
