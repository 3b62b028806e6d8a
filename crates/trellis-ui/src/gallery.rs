use trellis_core::{Attrs, Element};

use crate::loader::ImageList;
use crate::{Block, Image, Text};

/// Presentational dog gallery: pure function of its inputs. Shows the hover
/// indicator only while `hovering`, then one image per payload entry in
/// source order, keyed by position.
pub fn DogGallery(hovering: bool, data: &ImageList) -> Element {
    let mut children = Vec::new();
    if hovering {
        children.push(Text("Hovering!"));
    }
    children.push(
        Block(Attrs::new()).with_children(
            data.message
                .iter()
                .enumerate()
                .map(|(index, src)| Image(src.clone(), "Dog").key(index as u64))
                .collect(),
        ),
    );
    Block(Attrs::new()).with_children(children)
}
