//! Type aliases for commonly used single-threaded shared types.
//!
//! The overview runs entirely on the GUI event loop, so shared state uses
//! `Rc<RefCell<T>>` rather than atomics or locks. These aliases keep the
//! nesting readable and make the sharing discipline uniform across crates.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// # Example
/// ```rust,ignore
/// let state: Shared<WidgetState> = Rc::new(RefCell::new(WidgetState::default()));
/// state.borrow_mut().update();
/// ```
pub type Shared<T> = Rc<RefCell<T>>;

/// A non-owning handle to shared state.
///
/// Deferred tasks and signal handlers hold this instead of `Shared<T>` so a
/// disposed widget can actually drop; an upgrade failure means the owner is
/// gone and the task degrades to a no-op.
pub type SharedWeak<T> = Weak<RefCell<T>>;

/// An optional shared reference, for lazily-initialized shared state.
pub type SharedOption<T> = Rc<RefCell<Option<T>>>;

/// A boxed callback taking no arguments.
pub type Callback = Box<dyn Fn()>;

/// Wraps a value into a [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
