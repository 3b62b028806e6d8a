use std::sync::Arc;
use std::thread;
use std::time::Duration;

use trellis_ui::{DogGallery, Host, HoverStrategy, HttpFeed, with_hover, with_loader};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let strategy = match std::env::args().nth(1).as_deref() {
        Some("listeners") => HoverStrategy::Listeners,
        _ => HoverStrategy::Props,
    };

    let loaded = with_loader(Arc::new(HttpFeed::default()), |hovering: &bool, data| {
        DogGallery(*hovering, data)
    });
    let app = with_hover(strategy, move |_: &(), hovering| loaded(&hovering));
    let mut build = move || app(&());

    let mut host = Host::new();
    let mut loaded_frame = false;
    for _ in 0..100 {
        loaded_frame = !host.render(&mut build).image_sources().is_empty();
        if loaded_frame {
            break;
        }
        thread::sleep(Duration::from_millis(100));
    }
    if !loaded_frame {
        log::warn!("feed did not resolve in time; printing the loading state");
    }

    let root = host.render(&mut build).root.id;
    host.pointer_enter(root);
    println!("{:#?}", host.render(&mut build).root);

    host.unmount();
    Ok(())
}
