//! Headless host: the collaborator that mounts element trees, stamps
//! identities, and routes host events to component handlers.

use std::rc::Rc;

use trellis_core::input::{self, PointerEvent, PointerEventKind};
use trellis_core::{Composition, Element, ElementId, ElementKind};

/// Handler clones for one stamped element, gathered while walking the frame.
pub struct Region {
    pub id: ElementId,
    pub on_pointer_enter: Option<Rc<dyn Fn(PointerEvent)>>,
    pub on_pointer_leave: Option<Rc<dyn Fn(PointerEvent)>>,
    pub on_text_change: Option<Rc<dyn Fn(String)>>,
}

/// Output of one render pass: the stamped tree plus its event regions.
pub struct Frame {
    pub root: Element,
    pub regions: Vec<Region>,
}

impl Frame {
    fn visit(el: &Element, f: &mut impl FnMut(&Element)) {
        f(el);
        for c in &el.children {
            Self::visit(c, f);
        }
    }

    /// Every text run in the frame, preorder.
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        Self::visit(&self.root, &mut |el| {
            if let ElementKind::Text { text } = &el.kind {
                out.push(text.clone());
            }
        });
        out
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t == needle)
    }

    /// Image sources in the frame, preorder.
    pub fn image_sources(&self) -> Vec<String> {
        let mut out = Vec::new();
        Self::visit(&self.root, &mut |el| {
            if let ElementKind::Image { src, .. } = &el.kind {
                out.push(src.clone());
            }
        });
        out
    }

    pub fn first_text_field(&self) -> Option<ElementId> {
        let mut found = None;
        Self::visit(&self.root, &mut |el| {
            if found.is_none() && matches!(el.kind, ElementKind::TextField { .. }) {
                found = Some(el.id);
            }
        });
        found
    }

    pub fn text_field_value(&self, id: ElementId) -> Option<String> {
        let mut found = None;
        Self::visit(&self.root, &mut |el| {
            if el.id == id {
                if let ElementKind::TextField { value, .. } = &el.kind {
                    found = Some(value.clone());
                }
            }
        });
        found
    }
}

/// Mounts a build function and drives it frame by frame. One mounted host
/// per thread: the composition slots are thread-local.
pub struct Host {
    composition: Option<Composition>,
    frame: Option<Frame>,
}

impl Host {
    pub fn new() -> Self {
        Self {
            composition: None,
            frame: None,
        }
    }

    /// Composes one frame. Ids are stamped preorder starting at 1 and bound
    /// into any `NodeRef`s; if a ref picked up a new id, the pass runs once
    /// more so effects keyed on the ref see the bound target.
    pub fn render<F: FnMut() -> Element>(&mut self, build: &mut F) -> &Frame {
        let comp = self.composition.get_or_insert_with(Composition::new);

        let mut root = comp.compose(|| build());
        if stamp_and_bind(&mut root) {
            root = comp.compose(|| build());
            stamp_and_bind(&mut root);
        }

        let mut regions = Vec::new();
        collect_regions(&root, &mut regions);
        self.frame.insert(Frame { root, regions })
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn pointer_enter(&self, id: ElementId) {
        self.deliver(id, PointerEventKind::Enter);
    }

    pub fn pointer_leave(&self, id: ElementId) {
        self.deliver(id, PointerEventKind::Leave);
    }

    /// Delivers a change event carrying the field's new full value.
    pub fn set_text(&self, id: ElementId, text: &str) {
        let handler = self.frame.as_ref().and_then(|f| {
            f.regions
                .iter()
                .find(|r| r.id == id)
                .and_then(|r| r.on_text_change.clone())
        });
        match handler {
            Some(h) => h(text.to_string()),
            None => log::warn!("set_text: element {id} has no change handler"),
        }
    }

    /// Unmounts: scope disposers run, then all composition slots drop.
    pub fn unmount(&mut self) {
        if let Some(comp) = self.composition.take() {
            comp.dispose();
        }
        self.frame = None;
    }

    fn deliver(&self, id: ElementId, kind: PointerEventKind) {
        let event = PointerEvent {
            target: id,
            event: kind,
        };

        // Attr handlers first, then native listeners, each cloned out before
        // running so handlers may mutate state freely.
        let handler = self.frame.as_ref().and_then(|f| {
            f.regions.iter().find(|r| r.id == id).and_then(|r| match kind {
                PointerEventKind::Enter => r.on_pointer_enter.clone(),
                PointerEventKind::Leave => r.on_pointer_leave.clone(),
            })
        });
        if let Some(h) = handler {
            h(event);
        }
        input::dispatch(event);
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}

/// Stamps preorder ids and fills node refs. Returns true when any ref
/// changed value, meaning composed state keyed on a ref is now stale.
fn stamp_and_bind(root: &mut Element) -> bool {
    fn walk(el: &mut Element, next: &mut ElementId, changed: &mut bool) {
        el.id = *next;
        *next += 1;
        if let Some(node_ref) = &el.node_ref {
            if node_ref.get() != Some(el.id) {
                node_ref.set(Some(el.id));
                *changed = true;
            }
        }
        for c in &mut el.children {
            walk(c, next, changed);
        }
    }

    let mut next = 1;
    let mut changed = false;
    walk(root, &mut next, &mut changed);
    changed
}

fn collect_regions(el: &Element, out: &mut Vec<Region>) {
    let on_text_change = match &el.kind {
        ElementKind::TextField { on_change, .. } => on_change.clone(),
        _ => None,
    };
    let has_handlers = el.attrs.on_pointer_enter.is_some()
        || el.attrs.on_pointer_leave.is_some()
        || on_text_change.is_some();

    if has_handlers {
        out.push(Region {
            id: el.id,
            on_pointer_enter: el.attrs.on_pointer_enter.clone(),
            on_pointer_leave: el.attrs.on_pointer_leave.clone(),
            on_text_change,
        });
    }
    for c in &el.children {
        collect_regions(c, out);
    }
}
