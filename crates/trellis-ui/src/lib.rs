#![allow(non_snake_case)]
//! Widgets, the headless host, and two composition patterns:
//! wrapper components ([`with_loader`], [`with_hover`]) and
//! render-props ([`TemperatureInput`]).

pub mod gallery;
pub mod host;
pub mod hover;
pub mod loader;
pub mod temperature;

use std::rc::Rc;

use trellis_core::{Attrs, Element, ElementKind};

pub use gallery::DogGallery;
pub use host::{Frame, Host, Region};
pub use hover::{HoverStrategy, remember_hover, with_hover};
pub use loader::{DOG_API_URL, FeedError, HttpFeed, ImageFeed, ImageList, with_loader};
pub use temperature::{Fahrenheit, Kelvin, TemperatureInput};

pub fn Block(attrs: Attrs) -> Element {
    Element::new(ElementKind::Block).attrs(attrs)
}

pub fn Text(text: impl Into<String>) -> Element {
    Element::new(ElementKind::Text { text: text.into() })
}

pub fn Image(src: impl Into<String>, alt: impl Into<String>) -> Element {
    Element::new(ElementKind::Image {
        src: src.into(),
        alt: alt.into(),
    })
}

pub fn TextField(
    value: impl Into<String>,
    hint: impl Into<String>,
    on_change: impl Fn(String) + 'static,
) -> Element {
    Element::new(ElementKind::TextField {
        value: value.into(),
        hint: hint.into(),
        on_change: Some(Rc::new(on_change)),
    })
}
