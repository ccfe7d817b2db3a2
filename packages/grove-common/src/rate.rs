use cosmwasm_std::Uint128;

/// Aggregate entry count at or below which every rebate pays the flat base
/// amount. Once the count exceeds the cap the rate tracks the mint curve.
pub const FLAT_RATE_ENTRY_CAP: u64 = 100;

/// Rebate owed per qualifying tree.
///
/// While `total_entries` is at or below [`FLAT_RATE_ENTRY_CAP`] the rate is
/// the flat `base` amount. Beyond the cap it follows the registry's
/// ascending mint curve as `mint_price - mint_floor`, which keeps a
/// holder's net mint cost pinned near the floor as the curve climbs.
///
/// The subtraction saturates and the result is clamped to `base`, so a
/// mint price at or below the floor, or a premium smaller than the base,
/// still pays the base amount.
pub fn rebate_rate(
    total_entries: u64,
    mint_price: Uint128,
    base: Uint128,
    mint_floor: Uint128,
) -> Uint128 {
    if total_entries <= FLAT_RATE_ENTRY_CAP {
        return base;
    }
    mint_price.saturating_sub(mint_floor).max(base)
}
