pub use crate::effects::{Dispose, effect, on_unmount};
pub use crate::effects_ext::{disposable_effect, side_effect};
pub use crate::element::{
    Attrs, Element, ElementId, ElementKind, NodeRef, PointerCallback, TextCallback,
};
pub use crate::input::{PointerEvent, PointerEventKind};
pub use crate::runtime::{
    Composition, clear_slots, remember, remember_state, remember_state_with_key, remember_with_key,
};
pub use crate::scope::{Scope, current_scope, scoped_effect};
pub use crate::signal::{Signal, signal};
