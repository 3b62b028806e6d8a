use std::cell::Cell;
use std::rc::Rc;

use crate::input::PointerEvent;

pub type ElementId = u64;

pub type PointerCallback = Rc<dyn Fn(PointerEvent)>;
pub type TextCallback = Rc<dyn Fn(String)>;

/// Shared cell the host fills with the stamped id of the element it is bound
/// to. Empty until the first host pass; rebinding changes the value, which is
/// what keyed effects watch to re-subscribe.
#[derive(Clone, Default)]
pub struct NodeRef(Rc<Cell<Option<ElementId>>>);

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<ElementId> {
        self.0.get()
    }

    pub fn set(&self, id: Option<ElementId>) {
        self.0.set(id);
    }
}

impl std::fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NodeRef").field(&self.0.get()).finish()
    }
}

/// Event handlers carried by an element.
#[derive(Clone, Default)]
pub struct Attrs {
    pub on_pointer_enter: Option<PointerCallback>,
    pub on_pointer_leave: Option<PointerCallback>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pointer_enter(mut self, f: impl Fn(PointerEvent) + 'static) -> Self {
        self.on_pointer_enter = Some(Rc::new(f));
        self
    }

    pub fn on_pointer_leave(mut self, f: impl Fn(PointerEvent) + 'static) -> Self {
        self.on_pointer_leave = Some(Rc::new(f));
        self
    }
}

impl std::fmt::Debug for Attrs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attrs")
            .field(
                "on_pointer_enter",
                &self.on_pointer_enter.as_ref().map(|_| "..."),
            )
            .field(
                "on_pointer_leave",
                &self.on_pointer_leave.as_ref().map(|_| "..."),
            )
            .finish()
    }
}

#[derive(Clone)]
pub enum ElementKind {
    Block,
    Text {
        text: String,
    },
    Image {
        src: String,
        alt: String,
    },
    TextField {
        value: String,
        hint: String,
        on_change: Option<TextCallback>,
    },
}

impl std::fmt::Debug for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Block => write!(f, "Block"),
            ElementKind::Text { text } => f.debug_struct("Text").field("text", text).finish(),
            ElementKind::Image { src, alt } => f
                .debug_struct("Image")
                .field("src", src)
                .field("alt", alt)
                .finish(),
            ElementKind::TextField { value, hint, .. } => f
                .debug_struct("TextField")
                .field("value", value)
                .field("hint", hint)
                .field("on_change", &"<callback>")
                .finish(),
        }
    }
}

/// One node of the composed output tree. `id` is 0 until the host stamps the
/// frame; `key` is explicit list identity for siblings.
#[derive(Clone, Debug)]
pub struct Element {
    pub id: ElementId,
    pub key: Option<u64>,
    pub kind: ElementKind,
    pub attrs: Attrs,
    pub children: Vec<Element>,
    pub node_ref: Option<NodeRef>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Element {
            id: 0,
            key: None,
            kind,
            attrs: Attrs::default(),
            children: vec![],
            node_ref: None,
        }
    }

    pub fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn key(mut self, key: u64) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_children(mut self, kids: Vec<Element>) -> Self {
        self.children = kids;
        self
    }

    pub fn bind(mut self, node_ref: &NodeRef) -> Self {
        self.node_ref = Some(node_ref.clone());
        self
    }
}
