pub mod controller;
pub mod layout;
pub mod session;
pub mod state;
pub mod viewport;
