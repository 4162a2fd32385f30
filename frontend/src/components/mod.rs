pub mod guard;
pub mod layout;
