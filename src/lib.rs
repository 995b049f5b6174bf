//! Declarative scope guards.
//!
//! Attach a cleanup action to the lexical scope it is declared in,
//! and it will run automatically when the scope ends, on every exit
//! path: normal fall-through, early return, or panic.
//!
//! A guard holds an [`ExitPolicy`] deciding when its action runs:
//! always, only when the scope is unwinding from a panic, or only
//! when it is not. The check happens at the moment the guard goes
//! out of scope, via [`thread::panicking`].
//!
//! Guards declared in the same scope run in reverse declaration
//! order, like any other local binding.
//!
//! [`ExitPolicy`]: enum.ExitPolicy.html
//! [`thread::panicking`]: https://doc.rust-lang.org/std/thread/fn.panicking.html
//!
//! # Example
//!
//! ```rust
//! use scope_exit::{defer, defer_on_failure, defer_on_success};
//!
//! fn example() {
//!     let file = "work.tmp";
//!
//!     defer! { println!("removing {}", file); }
//!     defer_on_failure! { println!("cleaning up after a panic"); }
//!     defer_on_success! { println!("all good"); }
//!
//!     // ... work that may panic ...
//! }
//! # example();
//! ```

#![forbid(unsafe_code)]

mod guard;
mod macros;

pub use guard::guard;
pub use guard::on_scope_exit;
pub use guard::on_scope_failure;
pub use guard::on_scope_success;
pub use guard::ExitPolicy;
pub use guard::ScopeGuard;
