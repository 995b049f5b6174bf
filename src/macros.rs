/// Defer the execution until the scope is done.
///
/// The body runs no matter how the scope ends. Expands to a single
/// [`ScopeGuard`] binding, so using the macro more than once in one
/// block is fine, the guards run in reverse declaration order.
///
/// [`ScopeGuard`]: struct.ScopeGuard.html
#[macro_export]
macro_rules! defer {
    ($($body:tt)*) => {
        let _guard = $crate::on_scope_exit(|| {
            let _: () = { $($body)* };
        });
    };
}

/// Defer the execution until the scope is done, only when the scope
/// is unwinding from a panic.
#[macro_export]
macro_rules! defer_on_failure {
    ($($body:tt)*) => {
        let _guard = $crate::on_scope_failure(|| {
            let _: () = { $($body)* };
        });
    };
}

/// Defer the execution until the scope is done, only when the scope
/// ends without a panic.
#[macro_export]
macro_rules! defer_on_success {
    ($($body:tt)*) => {
        let _guard = $crate::on_scope_success(|| {
            let _: () = { $($body)* };
        });
    };
}
