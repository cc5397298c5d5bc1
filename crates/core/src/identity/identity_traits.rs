//! Identity provider trait and basic implementations.

/// Supplies the opaque owner identifier (`uid`) that scopes every query.
///
/// Absence of an identity is "no data", never an error: subscription
/// helpers called without an owner deliver one empty snapshot and a no-op
/// handle.
pub trait IdentityProviderTrait: Send + Sync {
    fn current_user(&self) -> Option<String>;
}

/// Identity fixed at construction time. Suitable for embedders that resolve
/// authentication once, and for tests.
#[derive(Clone, Debug)]
pub struct StaticIdentity {
    uid: String,
}

impl StaticIdentity {
    pub fn new(uid: impl Into<String>) -> Self {
        StaticIdentity { uid: uid.into() }
    }
}

impl IdentityProviderTrait for StaticIdentity {
    fn current_user(&self) -> Option<String> {
        Some(self.uid.clone())
    }
}

/// Signed-out state: no identity, so every scoped view is empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIdentity;

impl IdentityProviderTrait for NoIdentity {
    fn current_user(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_identity_returns_uid() {
        let identity = StaticIdentity::new("user-1");
        assert_eq!(identity.current_user(), Some("user-1".to_string()));
    }

    #[test]
    fn test_no_identity_returns_none() {
        assert_eq!(NoIdentity.current_user(), None);
    }
}
