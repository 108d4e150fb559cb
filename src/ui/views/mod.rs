pub mod config;
pub mod load;
pub mod menu;
pub mod payroll;
pub mod roster;
