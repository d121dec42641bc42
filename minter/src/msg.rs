use common::msg::{HasRoleResponse, PausedResponse, RoleMembersResponse, TokenResponse};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::state::MinterRole;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Wrapped CW20 contract; its minter must be handed to this contract
    pub token: String,
    /// Receives every role; defaults to the instantiating sender
    pub admin: Option<String>,
    /// Relayer accounts granted `mint` and `burn`
    pub operators: Option<Vec<String>>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Issue `amount` wrapped tokens to `to` (`mint` role, not paused)
    Mint { to: String, amount: Uint128 },
    /// Destroy `amount` wrapped tokens held by `from` (`burn` role, not paused).
    /// `from` must have granted the Minter an allowance on the token.
    Burn { from: String, amount: Uint128 },
    /// `pauser` role
    Pause {},
    /// `pauser` role
    Unpause {},
    /// `admin` role
    GrantRole { role: MinterRole, account: String },
    /// `admin` role
    RevokeRole { role: MinterRole, account: String },
    /// Drop one of the sender's own roles
    RenounceRole { role: MinterRole },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Wrapped CW20 contract
    #[returns(TokenResponse)]
    Token {},
    /// Total wrapped supply, to compare against the Locker's custody
    #[returns(SupplyResponse)]
    Supply {},
    #[returns(PausedResponse)]
    Paused {},
    #[returns(HasRoleResponse)]
    HasRole { role: MinterRole, account: String },
    #[returns(RoleMembersResponse)]
    RoleMembers {
        role: MinterRole,
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct SupplyResponse {
    pub total_supply: Uint128,
}
