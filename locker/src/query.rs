//! Query handlers for the Locker contract.

use common::msg::TokenResponse;
use cosmwasm_std::{Deps, Env, StdResult};
use cw20::{BalanceResponse, Cw20QueryMsg};

use crate::msg::{CustodyResponse, LockBalanceResponse};
use crate::state::{LOCK_BALANCE, TOKEN};

pub fn query_lock_balance(deps: Deps) -> StdResult<LockBalanceResponse> {
    Ok(LockBalanceResponse {
        lock_balance: LOCK_BALANCE.load(deps.storage)?,
    })
}

pub fn query_token(deps: Deps) -> StdResult<TokenResponse> {
    Ok(TokenResponse {
        token: TOKEN.load(deps.storage)?,
    })
}

/// Tracked custody and the on-ledger balance side by side.
///
/// They differ only if tokens were sent to the Locker outside of `Lock`;
/// the ledger balance is never below the tracked custody.
pub fn query_custody(deps: Deps, env: Env) -> StdResult<CustodyResponse> {
    let token = TOKEN.load(deps.storage)?;
    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;

    Ok(CustodyResponse {
        lock_balance: LOCK_BALANCE.load(deps.storage)?,
        ledger_balance: balance.balance,
    })
}
