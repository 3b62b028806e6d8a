use std::cell::RefCell;
use std::rc::Rc;

use crate::element::ElementId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Enter,
    Leave,
}

#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub target: ElementId,
    pub event: PointerEventKind,
}

pub type ListenerId = u64;

struct Listener {
    id: ListenerId,
    target: ElementId,
    kind: PointerEventKind,
    handler: Rc<dyn Fn(PointerEvent)>,
}

#[derive(Default)]
struct Registry {
    next_id: ListenerId,
    listeners: Vec<Listener>,
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
}

/// Subscribes `handler` to `kind` events on `target`. The handle must be
/// passed to [`detach`] when the subscription ends; nothing detaches it
/// implicitly.
pub fn attach(
    target: ElementId,
    kind: PointerEventKind,
    handler: impl Fn(PointerEvent) + 'static,
) -> ListenerId {
    REGISTRY.with(|r| {
        let mut r = r.borrow_mut();
        r.next_id += 1;
        let id = r.next_id;
        r.listeners.push(Listener {
            id,
            target,
            kind,
            handler: Rc::new(handler),
        });
        id
    })
}

/// Removes a listener. Detaching an already-removed listener is a no-op.
pub fn detach(listener: ListenerId) {
    REGISTRY.with(|r| {
        r.borrow_mut().listeners.retain(|l| l.id != listener);
    });
}

/// Delivers `event` to every listener attached to its target. Handlers are
/// cloned out before running, so a handler may attach or detach listeners.
pub fn dispatch(event: PointerEvent) {
    let handlers: Vec<Rc<dyn Fn(PointerEvent)>> = REGISTRY.with(|r| {
        r.borrow()
            .listeners
            .iter()
            .filter(|l| l.target == event.target && l.kind == event.event)
            .map(|l| l.handler.clone())
            .collect()
    });
    for h in handlers {
        h(event);
    }
}

pub fn listener_count(target: ElementId) -> usize {
    REGISTRY.with(|r| {
        r.borrow()
            .listeners
            .iter()
            .filter(|l| l.target == target)
            .count()
    })
}
