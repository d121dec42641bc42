//! Common - Shared Guard for the Manual Bridge Contracts
//!
//! Both bridge contracts (Locker and Minter) wrap their balance mutations in the
//! same guard:
//! - `roles` - role tag to account set, granted and revoked by the admin role
//! - `pause` - emergency stop switch toggled by the pauser role
//! - `validation` - principal and amount checks shared by all operations
//!
//! Each contract keeps its own storage; nothing here is shared between
//! contract instances.

pub mod error;
pub mod guard;
pub mod msg;
pub mod pause;
pub mod roles;
pub mod validation;

pub use error::GuardError;
pub use guard::assert_operation;
pub use pause::{
    assert_not_paused, execute_pause, execute_unpause, is_paused, query_paused, PAUSED,
};
pub use roles::{
    assert_role, execute_grant_role, execute_renounce_role, execute_revoke_role, grant_role,
    has_role, query_has_role, query_role_members, revoke_role, BridgeRole, ROLES,
};
pub use validation::{validate_amount, validate_principal};
