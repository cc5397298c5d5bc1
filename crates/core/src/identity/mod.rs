//! Identity boundary - opaque owner identifiers scoping every query.

mod identity_traits;

pub use identity_traits::{IdentityProviderTrait, NoIdentity, StaticIdentity};
