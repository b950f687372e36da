pub mod account_service;
pub mod budget_service;
pub mod investment_service;
pub mod loader_service;
pub mod net_worth_service;
pub mod transaction_service;
