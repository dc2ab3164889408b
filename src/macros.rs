/// Run the given statements when the enclosing scope ends.
///
/// `defer!(body)` binds the guard to a hidden local. `defer!(name, body)` binds
/// it to `name`, and `defer!(mut name, body)` makes that binding mutable so the
/// guard can later be cancelled or transferred.
///
/// ```
/// use std::cell::Cell;
/// use scope_finally::defer;
///
/// let hits = Cell::new(0);
/// {
///     defer!(hits.set(hits.get() + 1));
///     assert_eq!(hits.get(), 0);
/// }
/// assert_eq!(hits.get(), 1);
/// ```
#[macro_export]
macro_rules! defer {
    (mut $id:ident, $($body:tt)*) => {
        let mut $id = $crate::make_scope_guard(|| { $($body)*; });
    };
    ($id:ident, $($body:tt)*) => {
        let $id = $crate::make_scope_guard(|| { $($body)*; });
    };
    ($($body:tt)*) => {
        let _guard = $crate::make_scope_guard(|| { $($body)*; });
    };
}
