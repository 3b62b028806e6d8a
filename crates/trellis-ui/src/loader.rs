//! Data-loading wrapper: composes a component with a one-shot background
//! fetch, showing a placeholder until the payload lands.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::thread;

use serde::Deserialize;
use thiserror::Error;
use trellis_core::{Element, launched_effect, remember_state};

use crate::Text;

pub const DOG_API_URL: &str = "https://dog.ceo/api/breed/labrador/images/random/6";

/// Wire payload: an ordered list of image URLs. Extra fields in the response
/// body are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ImageList {
    pub message: Vec<String>,
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of an [`ImageList`]. `fetch` runs on a background thread.
pub trait ImageFeed: Send + Sync + 'static {
    fn fetch(&self) -> Result<ImageList, FeedError>;
}

/// Feed backed by a plain HTTP GET.
pub struct HttpFeed {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpFeed {
    fn default() -> Self {
        Self::new(DOG_API_URL)
    }
}

impl ImageFeed for HttpFeed {
    fn fetch(&self) -> Result<ImageList, FeedError> {
        let body = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Default)]
struct Pending {
    value: Option<ImageList>,
    rx: Option<Receiver<ImageList>>,
}

/// Wraps `inner` in a component that fetches from `feed` once on mount.
///
/// While the payload is absent the component renders `Text("Loading...")`.
/// Once drained, `inner` receives the payload on every pass and the payload
/// never changes again. A fetch or decode failure is logged and leaves the
/// component loading; a payload arriving after unmount finds its receiver
/// dropped and goes nowhere.
pub fn with_loader<P: 'static>(
    feed: Arc<dyn ImageFeed>,
    inner: impl Fn(&P, &ImageList) -> Element + 'static,
) -> impl Fn(&P) -> Element {
    move |props| {
        let pending = remember_state(Pending::default);

        launched_effect!((), {
            let pending = pending.clone();
            let feed = Arc::clone(&feed);
            move || {
                let (tx, rx) = channel();
                pending.borrow_mut().rx = Some(rx);
                thread::spawn(move || match feed.fetch() {
                    // After unmount the receiver is gone and the send fails.
                    Ok(list) => {
                        let _ = tx.send(list);
                    }
                    Err(err) => log::warn!("image feed fetch failed: {err}"),
                });
            }
        });

        {
            let mut p = pending.borrow_mut();
            if p.value.is_none() {
                if let Some(rx) = p.rx.take() {
                    match rx.try_recv() {
                        Ok(list) => p.value = Some(list),
                        Err(TryRecvError::Empty) => p.rx = Some(rx),
                        // Sender dropped without a payload: the fetch failed.
                        Err(TryRecvError::Disconnected) => {}
                    }
                }
            }
        }

        let p = pending.borrow();
        match p.value.as_ref() {
            Some(data) => inner(props, data),
            None => Text("Loading..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::mpsc::{Sender, channel};
    use std::time::{Duration, Instant};

    use super::*;
    use crate::host::Host;

    fn list(urls: &[&str]) -> ImageList {
        ImageList {
            message: urls.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Feed whose `fetch` blocks until the test releases the gate.
    struct GatedFeed {
        gate: Mutex<std::sync::mpsc::Receiver<()>>,
        payload: ImageList,
    }

    impl GatedFeed {
        fn new(payload: ImageList) -> (Sender<()>, Arc<Self>) {
            let (tx, rx) = channel();
            (
                tx,
                Arc::new(Self {
                    gate: Mutex::new(rx),
                    payload,
                }),
            )
        }
    }

    impl ImageFeed for GatedFeed {
        fn fetch(&self) -> Result<ImageList, FeedError> {
            let _ = self.gate.lock().unwrap().recv();
            Ok(self.payload.clone())
        }
    }

    struct FailingFeed;

    impl ImageFeed for FailingFeed {
        fn fetch(&self) -> Result<ImageList, FeedError> {
            Err(FeedError::Decode(
                serde_json::from_str::<ImageList>("{").unwrap_err(),
            ))
        }
    }

    fn render_until_loaded(host: &mut Host, build: &mut impl FnMut() -> Element) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if !host.render(build).image_sources().is_empty() {
                return true;
            }
            thread::sleep(Duration::from_millis(2));
        }
        false
    }

    #[test]
    fn shows_placeholder_then_payload_in_order() {
        let (gate, feed) = GatedFeed::new(list(&["a", "b"]));
        let component = with_loader(feed, |_: &(), data| {
            crate::Block(Default::default()).with_children(
                data.message
                    .iter()
                    .map(|src| crate::Image(src.clone(), "Dog"))
                    .collect(),
            )
        });

        let mut host = Host::new();
        let mut build = move || component(&());

        let frame = host.render(&mut build);
        assert!(frame.contains_text("Loading..."));
        assert!(frame.image_sources().is_empty());

        gate.send(()).unwrap();
        assert!(render_until_loaded(&mut host, &mut build));
        let frame = host.render(&mut build);
        assert_eq!(frame.image_sources(), vec!["a", "b"]);
        assert!(!frame.contains_text("Loading..."));

        host.unmount();
    }

    #[test]
    fn failed_fetch_stays_loading() {
        let component = with_loader(Arc::new(FailingFeed), |_: &(), data| {
            crate::Text(format!("{} images", data.message.len()))
        });

        let mut host = Host::new();
        let mut build = move || component(&());

        host.render(&mut build);
        thread::sleep(Duration::from_millis(20));
        let frame = host.render(&mut build);
        assert!(frame.contains_text("Loading..."));

        host.unmount();
    }

    #[test]
    fn payload_after_unmount_is_a_no_op() {
        let (gate, feed) = GatedFeed::new(list(&["late"]));
        let component = with_loader(feed, |_: &(), _| crate::Text("loaded"));

        let mut host = Host::new();
        let mut build = move || component(&());
        assert!(host.render(&mut build).contains_text("Loading..."));
        host.unmount();

        // Resolve after unmount: the payload has nowhere to go.
        gate.send(()).unwrap();
        thread::sleep(Duration::from_millis(20));

        // A fresh mount starts from scratch.
        let (_gate2, feed2) = GatedFeed::new(list(&["fresh"]));
        let component2 = with_loader(feed2, |_: &(), _| crate::Text("loaded"));
        let mut host2 = Host::new();
        let mut build2 = move || component2(&());
        assert!(host2.render(&mut build2).contains_text("Loading..."));
        host2.unmount();
    }
}
