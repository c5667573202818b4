//! Bearer-token authentication.
//!
//! Handlers depend on one of three extractors, each building on the previous:
//! [`BearerToken`] pulls the raw token out of the `Authorization` header,
//! [`CurrentUser`] decodes it and looks the subject up, and [`ActiveUser`]
//! additionally rejects disabled accounts.

mod bearer;
mod errors;
mod extractors;
mod state;

pub use bearer::{BearerToken, bearer_token_from_header};
pub use errors::{ApiAuthError, AuthErrorKind};
pub use extractors::{ActiveUser, CurrentUser};
pub use state::HasAuthBackend;
