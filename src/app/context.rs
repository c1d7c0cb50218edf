use crate::domain::ApplicationResourceMatcher;
use crate::ports::{ApplicationRegistry, StackIntrospector};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: StackIntrospector, R: ApplicationRegistry> {
    stacks: S,
    registry: R,
    matcher: ApplicationResourceMatcher,
}

impl<S: StackIntrospector, R: ApplicationRegistry> AppContext<S, R> {
    /// Create a new application context.
    pub fn new(stacks: S, registry: R, matcher: ApplicationResourceMatcher) -> Self {
        Self { stacks, registry, matcher }
    }

    /// Get a reference to the stack introspector.
    pub fn stacks(&self) -> &S {
        &self.stacks
    }

    /// Get a reference to the application registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Convention for picking the application-bearing resource.
    pub fn matcher(&self) -> &ApplicationResourceMatcher {
        &self.matcher
    }
}
