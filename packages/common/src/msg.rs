//! Query responses shared by the Locker and the Minter.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

#[cw_serde]
pub struct TokenResponse {
    /// CW20 contract the component operates on
    pub token: Addr,
}

#[cw_serde]
pub struct PausedResponse {
    pub paused: bool,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}

#[cw_serde]
pub struct RoleMembersResponse {
    /// Holders of the role, ascending by address
    pub members: Vec<Addr>,
}
