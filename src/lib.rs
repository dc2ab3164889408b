//! Run a closure when the current scope ends.
//!
//! ```
//! use scope_finally::make_scope_guard;
//!
//! let _guard = make_scope_guard(|| println!("leaving scope"));
//! println!("doing work");
//! ```

#[macro_use]
extern crate tracing;

mod guard;
mod macros;

pub use guard::{make_scope_guard, ScopeGuard};

pub mod prelude {
    pub use crate::defer;
    pub use crate::{make_scope_guard, ScopeGuard};
}
