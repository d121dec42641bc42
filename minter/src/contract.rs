use common::msg::TokenResponse;
use common::{
    assert_operation, execute_grant_role, execute_pause, execute_renounce_role,
    execute_revoke_role, execute_unpause, grant_role, query_has_role, query_paused,
    query_role_members, validate_amount, validate_principal, BridgeRole, PAUSED,
};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::{Cw20ExecuteMsg, Cw20QueryMsg, TokenInfoResponse};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, SupplyResponse};
use crate::state::{MinterRole, CONTRACT_NAME, CONTRACT_VERSION, TOKEN};

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
    PAUSED.save(deps.storage, &false)?;

    for role in MinterRole::ALL {
        grant_role(deps.storage, *role, &admin)?;
    }

    let operators = msg.operators.unwrap_or_default();
    for operator in &operators {
        let operator = validate_principal(deps.api, "operators", operator)?;
        grant_role(deps.storage, MinterRole::Mint, &operator)?;
        grant_role(deps.storage, MinterRole::Burn, &operator)?;
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("token", token)
        .add_attribute("operator_count", operators.len().to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { to, amount } => execute_mint(deps, info, to, amount),
        ExecuteMsg::Burn { from, amount } => execute_burn(deps, info, from, amount),
        ExecuteMsg::Pause {} => Ok(execute_pause::<MinterRole>(deps, info)?),
        ExecuteMsg::Unpause {} => Ok(execute_unpause::<MinterRole>(deps, info)?),
        ExecuteMsg::GrantRole { role, account } => {
            Ok(execute_grant_role(deps, info, role, account)?)
        }
        ExecuteMsg::RevokeRole { role, account } => {
            Ok(execute_revoke_role(deps, info, role, account)?)
        }
        ExecuteMsg::RenounceRole { role } => Ok(execute_renounce_role(deps, info, role)?),
    }
}

fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_operation(deps.storage, MinterRole::Mint, &info.sender)?;

    let to = validate_principal(deps.api, "to", &to)?;
    let amount = validate_amount(amount)?;
    let token = TOKEN.load(deps.storage)?;

    let mint_msg = WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: to.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(mint_msg)
        .add_attribute("method", "mint")
        .add_attribute("to", to)
        .add_attribute("amount", amount.to_string())
        .add_attribute("operator", info.sender))
}

fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    from: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_operation(deps.storage, MinterRole::Burn, &info.sender)?;

    let from = validate_principal(deps.api, "from", &from)?;
    let amount = validate_amount(amount)?;
    let token = TOKEN.load(deps.storage)?;

    // Holder balance and allowance are enforced by the token itself
    let burn_msg = WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::BurnFrom {
            owner: from.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(burn_msg)
        .add_attribute("method", "burn")
        .add_attribute("from", from)
        .add_attribute("amount", amount.to_string())
        .add_attribute("operator", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Token {} => to_json_binary(&query_token(deps)?),
        QueryMsg::Supply {} => to_json_binary(&query_supply(deps)?),
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

fn query_token(deps: Deps) -> StdResult<TokenResponse> {
    Ok(TokenResponse {
        token: TOKEN.load(deps.storage)?,
    })
}

fn query_supply(deps: Deps) -> StdResult<SupplyResponse> {
    let token = TOKEN.load(deps.storage)?;
    let info: TokenInfoResponse = deps
        .querier
        .query_wasm_smart(token, &Cw20QueryMsg::TokenInfo {})?;

    Ok(SupplyResponse {
        total_supply: info.total_supply,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
