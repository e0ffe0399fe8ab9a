mod errors;
mod simulated_authority;

use crate::models::AccountRecord;

pub use errors::AuthorityError;
pub use simulated_authority::SimulatedAuthority;

/// The external service that applies a balance update.
///
/// `Ok(status)` is the authority's answer and is recorded as-is. `Err` means the
/// call itself failed and is handled according to the engine's failure policy.
pub trait UpdateAuthority {
    fn attempt_update(&self, record: &AccountRecord) -> Result<bool, AuthorityError>;
}

impl<A: UpdateAuthority + ?Sized> UpdateAuthority for &A {
    fn attempt_update(&self, record: &AccountRecord) -> Result<bool, AuthorityError> {
        (**self).attempt_update(record)
    }
}
