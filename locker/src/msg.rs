//! Message types for the Locker contract

use common::msg::{HasRoleResponse, PausedResponse, RoleMembersResponse, TokenResponse};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::state::LockerRole;

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 contract to custody
    pub token: String,
    /// Receives every role; defaults to the instantiating sender
    pub admin: Option<String>,
    /// Relayer accounts granted `lock` and `unlock`
    pub operators: Option<Vec<String>>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Move `amount` from `from` into custody.
    /// `from` must have granted the Locker an allowance on the token.
    ///
    /// Authorization: `lock` role, not paused
    Lock { from: String, amount: Uint128 },

    /// Release `amount` from custody to `to`.
    ///
    /// Authorization: `unlock` role, not paused
    Unlock { to: String, amount: Uint128 },

    /// Authorization: `pauser` role
    Pause {},

    /// Authorization: `pauser` role
    Unpause {},

    /// Authorization: `admin` role
    GrantRole { role: LockerRole, account: String },

    /// Authorization: `admin` role
    RevokeRole { role: LockerRole, account: String },

    /// Drop one of the sender's own roles
    RenounceRole { role: LockerRole },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Units currently held in custody
    #[returns(LockBalanceResponse)]
    LockBalance {},

    /// Custodied CW20 contract
    #[returns(TokenResponse)]
    Token {},

    /// Tracked custody next to the Locker's actual token balance
    #[returns(CustodyResponse)]
    Custody {},

    #[returns(PausedResponse)]
    Paused {},

    #[returns(HasRoleResponse)]
    HasRole { role: LockerRole, account: String },

    #[returns(RoleMembersResponse)]
    RoleMembers {
        role: LockerRole,
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct LockBalanceResponse {
    pub lock_balance: Uint128,
}

#[cw_serde]
pub struct CustodyResponse {
    /// Custody tracked by lock/unlock
    pub lock_balance: Uint128,
    /// Token balance held by the Locker on the ledger
    pub ledger_balance: Uint128,
}
