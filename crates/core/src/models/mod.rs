pub mod account;
pub mod analytics;
pub mod budget;
pub mod category;
pub mod dataset;
pub mod holding;
pub mod net_worth;
pub mod settings;
pub mod transaction;
pub mod view_state;
