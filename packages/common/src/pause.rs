//! Emergency stop switch.

use cosmwasm_std::{Deps, DepsMut, MessageInfo, Response, StdResult, Storage};
use cw_storage_plus::Item;

use crate::error::GuardError;
use crate::msg::PausedResponse;
use crate::roles::{assert_role, BridgeRole};

pub const PAUSED: Item<bool> = Item::new("paused");

pub fn is_paused(storage: &dyn Storage) -> StdResult<bool> {
    Ok(PAUSED.may_load(storage)?.unwrap_or(false))
}

pub fn assert_not_paused(storage: &dyn Storage) -> Result<(), GuardError> {
    if is_paused(storage)? {
        return Err(GuardError::Paused);
    }
    Ok(())
}

/// Pause the contract (stops all balance-mutating operations).
pub fn execute_pause<R: BridgeRole>(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, GuardError> {
    set_paused::<R>(deps, info, true, "pause")
}

/// Unpause the contract (resumes operations).
pub fn execute_unpause<R: BridgeRole>(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, GuardError> {
    set_paused::<R>(deps, info, false, "unpause")
}

fn set_paused<R: BridgeRole>(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
    method: &str,
) -> Result<Response, GuardError> {
    assert_role(deps.storage, R::PAUSER, &info.sender)?;

    // Repeating the current state succeeds without a write
    let changed = is_paused(deps.storage)? != paused;
    if changed {
        PAUSED.save(deps.storage, &paused)?;
    }

    Ok(Response::new()
        .add_attribute("method", method)
        .add_attribute("sender", info.sender)
        .add_attribute("changed", changed.to_string()))
}

pub fn query_paused(deps: Deps) -> StdResult<PausedResponse> {
    Ok(PausedResponse {
        paused: is_paused(deps.storage)?,
    })
}
