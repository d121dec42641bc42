//! Role-based authorization.
//!
//! A role is a named set of accounts stored as `(role key, account) => true`.
//! Only holders of the admin role may grant or revoke roles; there is no other
//! hierarchy between roles.

use std::fmt;

use cosmwasm_std::{Addr, Deps, DepsMut, MessageInfo, Order, Response, StdResult, Storage};
use cw_storage_plus::{Bound, Map};

use crate::error::GuardError;
use crate::msg::{HasRoleResponse, RoleMembersResponse};
use crate::validation::validate_principal;

/// (role key, account) => true
pub const ROLES: Map<(&str, &Addr), bool> = Map::new("roles");

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

/// Role tag of one bridge contract.
pub trait BridgeRole: Copy + fmt::Debug + 'static {
    /// Manages grants of every role.
    const ADMIN: Self;
    /// Toggles the pause switch.
    const PAUSER: Self;
    /// Every role, in grant order at instantiation.
    const ALL: &'static [Self];

    /// Storage key, also used in events and errors.
    fn key(&self) -> &'static str;
}

pub fn has_role<R: BridgeRole>(storage: &dyn Storage, role: R, account: &Addr) -> bool {
    ROLES.has(storage, (role.key(), account))
}

pub fn assert_role<R: BridgeRole>(
    storage: &dyn Storage,
    role: R,
    caller: &Addr,
) -> Result<(), GuardError> {
    if !has_role(storage, role, caller) {
        return Err(GuardError::Unauthorized {
            caller: caller.to_string(),
            role: role.key().to_string(),
        });
    }
    Ok(())
}

/// Add `account` to `role`. Returns `false` if it was already a member.
pub fn grant_role<R: BridgeRole>(
    storage: &mut dyn Storage,
    role: R,
    account: &Addr,
) -> StdResult<bool> {
    if has_role(storage, role, account) {
        return Ok(false);
    }
    ROLES.save(storage, (role.key(), account), &true)?;
    Ok(true)
}

/// Remove `account` from `role`. Returns `false` if it was not a member.
pub fn revoke_role<R: BridgeRole>(storage: &mut dyn Storage, role: R, account: &Addr) -> bool {
    if !has_role(storage, role, account) {
        return false;
    }
    ROLES.remove(storage, (role.key(), account));
    true
}

// ============================================================================
// Execute Handlers
// ============================================================================

/// Grant a role (admin only).
pub fn execute_grant_role<R: BridgeRole>(
    deps: DepsMut,
    info: MessageInfo,
    role: R,
    account: String,
) -> Result<Response, GuardError> {
    assert_role(deps.storage, R::ADMIN, &info.sender)?;
    let account = validate_principal(deps.api, "account", &account)?;

    let changed = grant_role(deps.storage, role, &account)?;

    Ok(Response::new()
        .add_attribute("method", "grant_role")
        .add_attribute("role", role.key())
        .add_attribute("account", account)
        .add_attribute("sender", info.sender)
        .add_attribute("changed", changed.to_string()))
}

/// Revoke a role (admin only).
pub fn execute_revoke_role<R: BridgeRole>(
    deps: DepsMut,
    info: MessageInfo,
    role: R,
    account: String,
) -> Result<Response, GuardError> {
    assert_role(deps.storage, R::ADMIN, &info.sender)?;
    let account = validate_principal(deps.api, "account", &account)?;

    let changed = revoke_role(deps.storage, role, &account);

    Ok(Response::new()
        .add_attribute("method", "revoke_role")
        .add_attribute("role", role.key())
        .add_attribute("account", account)
        .add_attribute("sender", info.sender)
        .add_attribute("changed", changed.to_string()))
}

/// Drop one of the caller's own roles.
pub fn execute_renounce_role<R: BridgeRole>(
    deps: DepsMut,
    info: MessageInfo,
    role: R,
) -> Result<Response, GuardError> {
    let changed = revoke_role(deps.storage, role, &info.sender);

    Ok(Response::new()
        .add_attribute("method", "renounce_role")
        .add_attribute("role", role.key())
        .add_attribute("account", info.sender.clone())
        .add_attribute("sender", info.sender)
        .add_attribute("changed", changed.to_string()))
}

// ============================================================================
// Queries
// ============================================================================

pub fn query_has_role<R: BridgeRole>(
    deps: Deps,
    role: R,
    account: String,
) -> StdResult<HasRoleResponse> {
    let account = deps.api.addr_validate(&account)?;
    Ok(HasRoleResponse {
        has_role: has_role(deps.storage, role, &account),
    })
}

pub fn query_role_members<R: BridgeRole>(
    deps: Deps,
    role: R,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<RoleMembersResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let members = ROLES
        .prefix(role.key())
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<Addr>>>()?;

    Ok(RoleMembersResponse { members })
}

#[cfg(test)]
pub(crate) mod testing {
    use super::BridgeRole;

    #[derive(Clone, Copy, Debug, PartialEq)]
    pub enum TestRole {
        Admin,
        Operator,
        Pauser,
    }

    impl BridgeRole for TestRole {
        const ADMIN: Self = TestRole::Admin;
        const PAUSER: Self = TestRole::Pauser;
        const ALL: &'static [Self] = &[TestRole::Admin, TestRole::Operator, TestRole::Pauser];

        fn key(&self) -> &'static str {
            match self {
                TestRole::Admin => "admin",
                TestRole::Operator => "operator",
                TestRole::Pauser => "pauser",
            }
        }
    }
}
