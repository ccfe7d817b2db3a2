pub mod contract;
pub mod eligibility;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;

pub use error::ContractError;
