use std::marker::PhantomData;
use std::thread;

#[cfg(feature = "tracing")]
use log::trace;

/// Condition under which a [`ScopeGuard`] runs its action.
///
/// [`ScopeGuard`]: struct.ScopeGuard.html
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ExitPolicy {
    /// Run no matter how the scope ends.
    Always,

    /// Run only when the scope is unwinding from a panic.
    OnFailure,

    /// Run only when the scope ends without a panic.
    OnSuccess,
}

impl ExitPolicy {
    /// Is the condition met right now ?
    ///
    /// Must be asked at teardown time, the answer can differ from
    /// what it was when the guard was created.
    fn is_met(self) -> bool {
        match self {
            ExitPolicy::Always => true,
            ExitPolicy::OnFailure => thread::panicking(),
            ExitPolicy::OnSuccess => !thread::panicking(),
        }
    }
}

/// A guard that runs a deferred action when it goes out of scope,
/// if its [`ExitPolicy`] allows it.
///
/// The action runs at most once. The guard never catches or alters
/// a propagating panic, it only observes whether one is in flight.
///
/// If the action itself panics while the thread is already unwinding
/// from another panic, the process aborts (standard double panic
/// behavior). Keep deferred actions panic-free.
///
/// [`ExitPolicy`]: enum.ExitPolicy.html
#[must_use = "dropping a ScopeGuard immediately runs or discards its action"]
pub struct ScopeGuard<F: FnOnce()> {
    policy: ExitPolicy,
    action: Option<F>,

    // !Send + !Sync
    _marker: PhantomData<*mut ()>,
}

/// Returns a new [`ScopeGuard`] running `action` per `policy` when
/// the current scope ends.
///
/// [`ScopeGuard`]: struct.ScopeGuard.html
pub fn guard<F: FnOnce()>(policy: ExitPolicy, action: F) -> ScopeGuard<F> {
    ScopeGuard {
        policy,
        action: Some(action),
        _marker: PhantomData,
    }
}

/// Shorthand for [`guard`] with [`ExitPolicy::Always`].
///
/// [`guard`]: fn.guard.html
/// [`ExitPolicy::Always`]: enum.ExitPolicy.html#variant.Always
pub fn on_scope_exit<F: FnOnce()>(action: F) -> ScopeGuard<F> {
    guard(ExitPolicy::Always, action)
}

/// Shorthand for [`guard`] with [`ExitPolicy::OnFailure`].
///
/// [`guard`]: fn.guard.html
/// [`ExitPolicy::OnFailure`]: enum.ExitPolicy.html#variant.OnFailure
pub fn on_scope_failure<F: FnOnce()>(action: F) -> ScopeGuard<F> {
    guard(ExitPolicy::OnFailure, action)
}

/// Shorthand for [`guard`] with [`ExitPolicy::OnSuccess`].
///
/// [`guard`]: fn.guard.html
/// [`ExitPolicy::OnSuccess`]: enum.ExitPolicy.html#variant.OnSuccess
pub fn on_scope_success<F: FnOnce()>(action: F) -> ScopeGuard<F> {
    guard(ExitPolicy::OnSuccess, action)
}

impl<F: FnOnce()> Drop for ScopeGuard<F> {
    fn drop(&mut self) {
        if self.policy.is_met() {
            #[cfg(feature = "tracing")]
            trace!("{:?} is firing", self);

            if let Some(action) = self.action.take() {
                action();
            }
        } else {
            #[cfg(feature = "tracing")]
            trace!("{:?} is skipped", self);
        }
    }
}

#[cfg(feature = "tracing")]
impl<F: FnOnce()> std::fmt::Debug for ScopeGuard<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format!("ScopeGuard({:?})", self.policy))
    }
}
