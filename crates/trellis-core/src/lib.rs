//! # Signals, remembered state, and effects
//!
//! Trellis composes UI as plain functions that return an [`Element`] tree.
//! Instead of widgets with mutable fields there is a small reactive core:
//!
//! - `Signal<T>` — observable, reactive value.
//! - `remember*` — lifecycle-aware storage bound to composition.
//! - `effect` / `scoped_effect` / `disposable_effect` — side-effects with
//!   cleanup.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use trellis_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Remembered state
//!
//! Component state lives in `remember_*` slots rather than globals. `remember`
//! and `remember_state` are order-based: the Nth call in a composition pass
//! always refers to the Nth stored value. `remember_with_key` is key-based and
//! more stable across conditional branches.
//!
//! ```rust
//! use trellis_core::*;
//!
//! let comp = Composition::new();
//! let first = comp.compose(|| *remember(|| 1));
//! let second = comp.compose(|| *remember(|| 2));
//! assert_eq!((first, second), (1, 1));
//! comp.dispose();
//! ```
//!
//! ## Effects and cleanup
//!
//! `effect` runs once when composed and returns a [`Dispose`] guard run when
//! the owning scope is torn down. `disposable_effect` re-runs its body when
//! its key changes, cleaning up the previous run first, and cleans up on
//! unmount. `launched_effect!` fires once per key per call-site and is not
//! cancelled on unmount.
//!
//! A host drives composition through [`Composition`]: `compose` runs a build
//! function with the slot cursor reset, `dispose` tears down the root scope
//! and drops every slot.

pub mod effects;
pub mod effects_ext;
pub mod element;
pub mod input;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod signal;
pub mod tests;

pub use prelude::*;
