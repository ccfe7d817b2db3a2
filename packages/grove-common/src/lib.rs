pub mod rate;
pub mod types;

pub use rate::{rebate_rate, FLAT_RATE_ENTRY_CAP};
pub use types::{
    GrowthStage, MintPriceResponse, OwnerTreeCountResponse, RegistryQueryMsg, StageResponse,
    TreeInfoResponse, TreeOfOwnerAtIndexResponse,
};
