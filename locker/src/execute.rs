//! Custody handlers (Lock and Unlock).
//!
//! Custody is updated in the handler and the CW20 transfer is dispatched as a
//! message; a failing transfer reverts the whole transaction, custody included.

use common::{assert_operation, validate_amount, validate_principal};
use cosmwasm_std::{
    to_json_binary, DepsMut, Env, MessageInfo, Response, StdError, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::state::{LockerRole, LOCK_BALANCE, TOKEN};

/// Pull `amount` from `from` into custody via the Locker's allowance.
pub fn execute_lock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    from: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_operation(deps.storage, LockerRole::Lock, &info.sender)?;

    let from = validate_principal(deps.api, "from", &from)?;
    let amount = validate_amount(amount)?;

    let token = TOKEN.load(deps.storage)?;
    let lock_balance = LOCK_BALANCE
        .load(deps.storage)?
        .checked_add(amount)
        .map_err(StdError::from)?;
    LOCK_BALANCE.save(deps.storage, &lock_balance)?;

    let transfer = WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: from.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(transfer)
        .add_attribute("method", "lock")
        .add_attribute("from", from)
        .add_attribute("amount", amount.to_string())
        .add_attribute("lock_balance", lock_balance.to_string())
        .add_attribute("operator", info.sender))
}

/// Release `amount` from custody to `to`.
pub fn execute_unlock(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_operation(deps.storage, LockerRole::Unlock, &info.sender)?;

    let to = validate_principal(deps.api, "to", &to)?;
    let amount = validate_amount(amount)?;

    let token = TOKEN.load(deps.storage)?;
    let held = LOCK_BALANCE.load(deps.storage)?;
    let lock_balance = held
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientCustody {
            requested: amount,
            held,
        })?;
    LOCK_BALANCE.save(deps.storage, &lock_balance)?;

    let transfer = WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: to.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(transfer)
        .add_attribute("method", "unlock")
        .add_attribute("to", to)
        .add_attribute("amount", amount.to_string())
        .add_attribute("lock_balance", lock_balance.to_string())
        .add_attribute("operator", info.sender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::instantiate;
    use crate::msg::InstantiateMsg;
    use common::GuardError;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{from_json, CosmosMsg};

    fn setup(deps: DepsMut) {
        instantiate(
            deps,
            mock_env(),
            mock_info("terra1admin", &[]),
            InstantiateMsg {
                token: "terra1token".to_string(),
                admin: None,
                operators: Some(vec!["terra1relayer".to_string()]),
            },
        )
        .unwrap();
    }

    #[test]
    fn test_lock_dispatches_transfer_from() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let env = mock_env();
        let res = execute_lock(
            deps.as_mut(),
            env.clone(),
            mock_info("terra1relayer", &[]),
            "terra1user".to_string(),
            Uint128::new(10),
        )
        .unwrap();

        assert_eq!(res.messages.len(), 1);
        match &res.messages[0].msg {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr, msg, ..
            }) => {
                assert_eq!(contract_addr, "terra1token");
                let transfer: Cw20ExecuteMsg = from_json(msg).unwrap();
                assert_eq!(
                    transfer,
                    Cw20ExecuteMsg::TransferFrom {
                        owner: "terra1user".to_string(),
                        recipient: env.contract.address.to_string(),
                        amount: Uint128::new(10),
                    }
                );
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(LOCK_BALANCE.load(&deps.storage).unwrap(), Uint128::new(10));
    }

    #[test]
    fn test_unlock_dispatches_transfer() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());
        LOCK_BALANCE.save(&mut deps.storage, &Uint128::new(25)).unwrap();

        let res = execute_unlock(
            deps.as_mut(),
            mock_info("terra1relayer", &[]),
            "terra1user".to_string(),
            Uint128::new(10),
        )
        .unwrap();

        match &res.messages[0].msg {
            CosmosMsg::Wasm(WasmMsg::Execute { msg, .. }) => {
                let transfer: Cw20ExecuteMsg = from_json(msg).unwrap();
                assert_eq!(
                    transfer,
                    Cw20ExecuteMsg::Transfer {
                        recipient: "terra1user".to_string(),
                        amount: Uint128::new(10),
                    }
                );
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(LOCK_BALANCE.load(&deps.storage).unwrap(), Uint128::new(15));
    }

    #[test]
    fn test_unlock_beyond_custody_fails() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());
        LOCK_BALANCE.save(&mut deps.storage, &Uint128::new(10)).unwrap();

        let err = execute_unlock(
            deps.as_mut(),
            mock_info("terra1relayer", &[]),
            "terra1user".to_string(),
            Uint128::new(11),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ContractError::InsufficientCustody {
                requested: Uint128::new(11),
                held: Uint128::new(10),
            }
        );
        assert_eq!(LOCK_BALANCE.load(&deps.storage).unwrap(), Uint128::new(10));
    }

    #[test]
    fn test_lock_argument_errors() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute_lock(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1relayer", &[]),
            String::new(),
            Uint128::zero(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ContractError::Guard(GuardError::InvalidArgument { ref field, .. }) if field == "from"
        ));

        let err = execute_lock(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1relayer", &[]),
            "terra1user".to_string(),
            Uint128::zero(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ContractError::Guard(GuardError::InvalidArgument { ref field, .. }) if field == "amount"
        ));
        assert_eq!(LOCK_BALANCE.load(&deps.storage).unwrap(), Uint128::zero());
    }

    #[test]
    fn test_unlock_argument_errors() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute_unlock(
            deps.as_mut(),
            mock_info("terra1relayer", &[]),
            String::new(),
            Uint128::zero(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ContractError::Guard(GuardError::InvalidArgument { ref field, .. }) if field == "to"
        ));

        // Zero amount is rejected before the custody check
        let err = execute_unlock(
            deps.as_mut(),
            mock_info("terra1relayer", &[]),
            "terra1user".to_string(),
            Uint128::zero(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ContractError::Guard(GuardError::InvalidArgument { ref field, .. }) if field == "amount"
        ));
    }

    #[test]
    fn test_operations_need_their_own_role() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        // The pauser-only account cannot move custody
        common::grant_role(
            &mut deps.storage,
            LockerRole::Pauser,
            &cosmwasm_std::Addr::unchecked("terra1pauser"),
        )
        .unwrap();

        let err = execute_lock(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1pauser", &[]),
            "terra1user".to_string(),
            Uint128::new(10),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::Guard(GuardError::Unauthorized {
                caller: "terra1pauser".to_string(),
                role: "lock".to_string(),
            })
        );

        let err = execute_unlock(
            deps.as_mut(),
            mock_info("terra1pauser", &[]),
            "terra1user".to_string(),
            Uint128::new(10),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::Guard(GuardError::Unauthorized {
                caller: "terra1pauser".to_string(),
                role: "unlock".to_string(),
            })
        );
    }
}
