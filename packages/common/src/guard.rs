use cosmwasm_std::{Addr, Storage};

use crate::error::GuardError;
use crate::pause::assert_not_paused;
use crate::roles::{assert_role, BridgeRole};

/// Gate for every balance-mutating operation: the caller must hold `role`
/// and the contract must not be paused. Runs before any state is written.
pub fn assert_operation<R: BridgeRole>(
    storage: &dyn Storage,
    role: R,
    caller: &Addr,
) -> Result<(), GuardError> {
    assert_role(storage, role, caller)?;
    assert_not_paused(storage)
}
