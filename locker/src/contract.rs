//! Manual Bridge Locker - Entry Points
//!
//! Handlers live in:
//! - `execute` - lock and unlock
//! - `query` - custody queries
//!
//! Roles and pause are delegated to the shared guard in `common`.

use common::{
    execute_grant_role, execute_pause, execute_renounce_role, execute_revoke_role,
    execute_unpause, grant_role, query_has_role, query_paused, query_role_members,
    validate_principal, BridgeRole, PAUSED,
};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{execute_lock, execute_unlock};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_custody, query_lock_balance, query_token};
use crate::state::{LockerRole, CONTRACT_NAME, CONTRACT_VERSION, LOCK_BALANCE, TOKEN};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let token = validate_principal(deps.api, "token", &msg.token)?;
    let admin = match msg.admin {
        Some(admin) => validate_principal(deps.api, "admin", &admin)?,
        None => info.sender,
    };

    TOKEN.save(deps.storage, &token)?;
    LOCK_BALANCE.save(deps.storage, &Uint128::zero())?;
    PAUSED.save(deps.storage, &false)?;

    for role in LockerRole::ALL {
        grant_role(deps.storage, *role, &admin)?;
    }

    let operators = msg.operators.unwrap_or_default();
    for operator in &operators {
        let operator = validate_principal(deps.api, "operators", operator)?;
        grant_role(deps.storage, LockerRole::Lock, &operator)?;
        grant_role(deps.storage, LockerRole::Unlock, &operator)?;
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("token", token)
        .add_attribute("operator_count", operators.len().to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Custody
        ExecuteMsg::Lock { from, amount } => execute_lock(deps, env, info, from, amount),
        ExecuteMsg::Unlock { to, amount } => execute_unlock(deps, info, to, amount),

        // Emergency stop
        ExecuteMsg::Pause {} => Ok(execute_pause::<LockerRole>(deps, info)?),
        ExecuteMsg::Unpause {} => Ok(execute_unpause::<LockerRole>(deps, info)?),

        // Role management
        ExecuteMsg::GrantRole { role, account } => {
            Ok(execute_grant_role(deps, info, role, account)?)
        }
        ExecuteMsg::RevokeRole { role, account } => {
            Ok(execute_revoke_role(deps, info, role, account)?)
        }
        ExecuteMsg::RenounceRole { role } => Ok(execute_renounce_role(deps, info, role)?),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::LockBalance {} => to_json_binary(&query_lock_balance(deps)?),
        QueryMsg::Token {} => to_json_binary(&query_token(deps)?),
        QueryMsg::Custody {} => to_json_binary(&query_custody(deps, env)?),
        QueryMsg::Paused {} => to_json_binary(&query_paused(deps)?),
        QueryMsg::HasRole { role, account } => {
            to_json_binary(&query_has_role(deps, role, account)?)
        }
        QueryMsg::RoleMembers {
            role,
            start_after,
            limit,
        } => to_json_binary(&query_role_members(deps, role, start_after, limit)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
