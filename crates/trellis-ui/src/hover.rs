//! Hover tracking: one observable capability ("is the pointer over this
//! element?") with two interchangeable wirings.

use trellis_core::input::{self, PointerEventKind};
use trellis_core::{Element, NodeRef, Signal, disposable_effect, on_unmount, remember, signal};

/// How hover state is wired to the element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverStrategy {
    /// Declarative: enter/leave handlers attached as element attrs.
    Props,
    /// Imperative: native listeners attached to the referenced element.
    Listeners,
}

/// Wraps `inner` in a component carrying a hover flag, initialized false and
/// tracking the most recently delivered enter/leave event on the root of
/// `inner`'s output.
pub fn with_hover<P: 'static>(
    strategy: HoverStrategy,
    inner: impl Fn(&P, bool) -> Element + 'static,
) -> impl Fn(&P) -> Element {
    move |props| match strategy {
        HoverStrategy::Props => {
            let hovering = remember(|| signal(false));
            let el = inner(props, hovering.get());
            let attrs = {
                let enter = hovering.clone();
                let leave = hovering.clone();
                el.attrs
                    .clone()
                    .on_pointer_enter(move |_| enter.set(true))
                    .on_pointer_leave(move |_| leave.set(false))
            };
            el.attrs(attrs)
        }
        HoverStrategy::Listeners => {
            let node = remember(NodeRef::default);
            let hovering = remember_hover(&node);
            inner(props, hovering.get()).bind(&node)
        }
    }
}

/// Hover flag driven by native listeners on the element `node` refers to.
///
/// Listeners re-attach whenever the referenced identity changes and both are
/// detached before re-attaching and on unmount. Until the host binds the ref
/// there is no target, so the first composition pass attaches nothing.
pub fn remember_hover(node: &NodeRef) -> Signal<bool> {
    let hovering = remember(|| signal(false));
    let target = node.get();

    disposable_effect(target, {
        let hovering = (*hovering).clone();
        move || {
            let Some(id) = target else {
                return on_unmount(|| {});
            };
            let enter = input::attach(id, PointerEventKind::Enter, {
                let hovering = hovering.clone();
                move |_| hovering.set(true)
            });
            let leave = input::attach(id, PointerEventKind::Leave, {
                let hovering = hovering.clone();
                move |_| hovering.set(false)
            });
            on_unmount(move || {
                input::detach(enter);
                input::detach(leave);
            })
        }
    });

    (*hovering).clone()
}
