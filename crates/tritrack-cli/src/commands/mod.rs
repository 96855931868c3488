pub mod check;
pub mod export;
pub mod import;
pub mod reset;
pub mod set_var;
pub mod show;
