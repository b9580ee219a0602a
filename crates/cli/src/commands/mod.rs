pub mod allocate;
pub mod create_set;
pub mod deregister;
pub mod history;
pub mod register;
pub mod settle;
pub mod slash;
pub mod status;
