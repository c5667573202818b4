//! Authentication state trait and macro.

use crate::db::UserStore;
use crate::jwt::JwtConfig;

/// Trait for state types that provide the user store and JWT access needed by
/// the authentication extractors.
pub trait HasAuthBackend {
    fn jwt(&self) -> &JwtConfig;
    fn users(&self) -> &UserStore;
}

/// Macro to implement `HasAuthBackend` for state structs with the standard fields.
///
/// The struct must have these fields:
/// - `jwt: Arc<JwtConfig>`
/// - `db: Database`
///
/// # Example
/// ```ignore
/// use crate::impl_has_auth_backend;
///
/// #[derive(Clone)]
/// pub struct MyState {
///     pub db: Database,
///     pub jwt: Arc<JwtConfig>,
/// }
///
/// impl_has_auth_backend!(MyState);
/// ```
#[macro_export]
macro_rules! impl_has_auth_backend {
    ($state_type:ty) => {
        impl $crate::auth::HasAuthBackend for $state_type {
            fn jwt(&self) -> &$crate::jwt::JwtConfig {
                &self.jwt
            }
            fn users(&self) -> &$crate::db::UserStore {
                self.db.users()
            }
        }
    };
}
