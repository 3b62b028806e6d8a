use anyhow::Context;
use trellis_core::Attrs;
use trellis_ui::{Block, Fahrenheit, Host, Kelvin, TemperatureInput};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut host = Host::new();
    let mut build = || {
        TemperatureInput(|value| {
            Block(Attrs::new()).with_children(vec![Kelvin(value), Fahrenheit(value)])
        })
    };

    // Simulated keystrokes: the field reports its full value each time.
    for keys in ["2", "21"] {
        let field = host
            .render(&mut build)
            .first_text_field()
            .context("input not mounted")?;
        host.set_text(field, keys);
    }

    for line in host.render(&mut build).texts() {
        println!("{line}");
    }

    host.unmount();
    Ok(())
}
