//! Render-props demo: the input owns the value, the caller owns what gets
//! rendered from it.

use trellis_core::{Attrs, Element, remember_state};

use crate::{Block, Text, TextField};

/// Text input owning a single string value, initialized empty and updated
/// synchronously on every change event. Each pass renders the field plus
/// whatever `render` produces from the current value.
pub fn TemperatureInput(render: impl Fn(&str) -> Element) -> Element {
    let value = remember_state(String::new);

    let field = TextField(value.borrow().clone(), "Temp in °C", {
        let value = value.clone();
        move |s| *value.borrow_mut() = s
    });

    let v = value.borrow();
    Block(Attrs::new()).with_children(vec![field, render(&v)])
}

/// `value` as Kelvin: integer reading plus 273.15.
pub fn Kelvin(value: &str) -> Element {
    Text(format!("{}K", parse_degrees(value) + 273.15))
}

/// `value` as Fahrenheit: integer reading times 9/5 plus 32.
pub fn Fahrenheit(value: &str) -> Element {
    Text(format!("{}°F", parse_degrees(value) * 9.0 / 5.0 + 32.0))
}

/// Integer prefix of the input, sign included. Empty or non-numeric input
/// reads as 0; this is the fallback policy, not an error.
fn parse_degrees(value: &str) -> f64 {
    let s = value.trim();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let prefix: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let n: i64 = prefix.parse().unwrap_or(0);
    (sign * n) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Host;
    use trellis_core::ElementKind;

    fn text_of(el: &Element) -> String {
        match &el.kind {
            ElementKind::Text { text } => text.clone(),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn kelvin_parse_fallbacks() {
        assert_eq!(text_of(&Kelvin("")), "273.15K");
        assert_eq!(text_of(&Kelvin("0")), "273.15K");
        assert_eq!(text_of(&Kelvin("not a number")), "273.15K");
        assert_eq!(text_of(&Kelvin("12abc")), "285.15K");
    }

    #[test]
    fn fahrenheit_known_points() {
        assert_eq!(text_of(&Fahrenheit("100")), "212°F");
        assert_eq!(text_of(&Fahrenheit("-40")), "-40°F");
        assert_eq!(text_of(&Fahrenheit("")), "32°F");
    }

    #[test]
    fn displays_are_idempotent() {
        for input in ["", "0", "21", "-40", "garbage"] {
            assert_eq!(text_of(&Kelvin(input)), text_of(&Kelvin(input)));
            assert_eq!(text_of(&Fahrenheit(input)), text_of(&Fahrenheit(input)));
        }
    }

    #[test]
    fn input_drives_both_displays() {
        let mut host = Host::new();
        let mut build = || {
            TemperatureInput(|value| {
                Block(Attrs::new()).with_children(vec![Kelvin(value), Fahrenheit(value)])
            })
        };

        let frame = host.render(&mut build);
        assert_eq!(frame.texts(), vec!["273.15K", "32°F"]);
        let field = frame.first_text_field().expect("field mounted");

        // Keystrokes arrive as the field's full value, like any text input.
        host.set_text(field, "2");
        let frame = host.render(&mut build);
        assert_eq!(frame.texts(), vec!["275.15K", "35.6°F"]);

        let field = frame.first_text_field().expect("field mounted");
        host.set_text(field, "21");
        let frame = host.render(&mut build);
        assert_eq!(frame.texts(), vec!["294.15K", "69.8°F"]);
        assert_eq!(frame.text_field_value(field), Some("21".to_string()));

        host.unmount();
    }
}
