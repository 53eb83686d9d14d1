// src/loader.rs
//! Content loader: one GET per load, normalize whatever shape comes back, and
//! fall back to static content on any failure. Callers never see an `Err`.

use std::sync::Arc;

use metrics::counter;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::CmsConfig;
use crate::fetch::{ContentSource, FetchError, HttpSource};
use crate::logging::ensure_metrics_described;
use crate::normalize::{envelope_data, MediaResolver};

/// A content record that can be built from the `data` part of a CMS envelope.
pub trait Normalize: Sized {
    /// `None` when the payload does not fit this record's shape.
    fn from_data(data: &Value, media: &MediaResolver) -> Option<Self>;

    /// Content shown while the collection is not provisioned yet (403/404).
    fn placeholder(_note: &str, fallback: Self) -> Self {
        fallback
    }
}

/// A site section backed by one CMS collection.
pub trait Section: Normalize {
    const COLLECTION: &'static str;

    fn fallback() -> Self;

    fn endpoint() -> String {
        format!("/api/{}?populate=*", Self::COLLECTION)
    }
}

/// What the view should display next to the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum LoadStatus {
    Loading,
    Success,
    /// Success with a note: the collection exists but is not configured yet.
    Provisioning(String),
    Error(String),
}

impl LoadStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, LoadStatus::Success | LoadStatus::Provisioning(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }
}

/// Where the content in a [`Loaded`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Remote,
    Fallback,
    Placeholder,
}

/// Always a fully populated record, never a partial object or the raw envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loaded<T> {
    pub content: T,
    pub status: LoadStatus,
    pub origin: Origin,
}

impl<T> Loaded<T> {
    fn remote(content: T) -> Self {
        Self {
            content,
            status: LoadStatus::Success,
            origin: Origin::Remote,
        }
    }

    fn fallback(content: T, status: LoadStatus) -> Self {
        Self {
            content,
            status,
            origin: Origin::Fallback,
        }
    }
}

#[derive(Clone)]
pub struct ContentLoader {
    source: Arc<dyn ContentSource>,
    media: MediaResolver,
}

impl ContentLoader {
    pub fn new(source: Arc<dyn ContentSource>, config: &CmsConfig) -> Self {
        Self {
            source,
            media: MediaResolver::new(config),
        }
    }

    /// Loader over the live CMS described by `config`.
    pub fn from_config(config: CmsConfig) -> Self {
        let media = MediaResolver::new(&config);
        Self {
            source: Arc::new(HttpSource::new(config)),
            media,
        }
    }

    pub fn from_env() -> Self {
        Self::from_config(CmsConfig::from_env())
    }

    pub fn media(&self) -> &MediaResolver {
        &self.media
    }

    /// Fetch `endpoint` once and normalize it into `T`, or hand back `fallback`.
    ///
    /// - transport / non-2xx / undecodable body: fallback, `Error`
    /// - 403 / 404: `T::placeholder`, `Provisioning`
    /// - `data` missing or empty: fallback, `Success`
    /// - `data` present but not shaped like `T`: fallback, `Error`
    pub async fn load<T: Normalize>(&self, endpoint: &str, fallback: T) -> Loaded<T> {
        ensure_metrics_described();

        let body = match self.source.fetch_json(endpoint).await {
            Ok(body) => body,
            Err(e) if e.is_pre_provisioning() => {
                let note = provisioning_note(endpoint, &e);
                info!(endpoint, error = %e, "cms collection not provisioned; using placeholder");
                counter!("cms_placeholder_total").increment(1);
                return Loaded {
                    content: T::placeholder(&note, fallback),
                    status: LoadStatus::Provisioning(note),
                    origin: Origin::Placeholder,
                };
            }
            Err(e) => {
                warn!(
                    endpoint,
                    source = self.source.name(),
                    error = %e,
                    "cms fetch failed; using fallback"
                );
                counter!("cms_fetch_errors_total", "kind" => e.kind()).increment(1);
                counter!("cms_fallback_total").increment(1);
                return Loaded::fallback(fallback, LoadStatus::Error(e.to_string()));
            }
        };
        debug!(endpoint, body = %body, "cms raw response");

        let Some(data) = envelope_data(&body) else {
            debug!(endpoint, "cms returned no data; using fallback");
            counter!("cms_fallback_total").increment(1);
            return Loaded::fallback(fallback, LoadStatus::Success);
        };

        match T::from_data(data, &self.media) {
            Some(content) => Loaded::remote(content),
            None => {
                warn!(endpoint, "cms payload has unexpected shape; using fallback");
                counter!("cms_fallback_total").increment(1);
                Loaded::fallback(
                    fallback,
                    LoadStatus::Error(format!("unexpected payload shape from {endpoint}")),
                )
            }
        }
    }

    pub async fn load_section<S: Section>(&self) -> Loaded<S> {
        self.load(&S::endpoint(), S::fallback()).await
    }

    /// Start loading `S` in the background, the way a section does on mount.
    ///
    /// The handle starts out as fallback content with `Loading` status. Dropping
    /// it aborts the request, so a result can never land after teardown.
    pub fn spawn_load<S>(&self) -> LoadHandle<S>
    where
        S: Section + Clone + Send + Sync + 'static,
    {
        let (tx, rx) = watch::channel(Loaded::fallback(S::fallback(), LoadStatus::Loading));
        let loader = self.clone();
        let task = tokio::spawn(async move {
            let loaded = loader.load_section::<S>().await;
            // Receiver gone means the handle was dropped mid-flight.
            let _ = tx.send(loaded);
        });
        LoadHandle { rx, task }
    }
}

fn provisioning_note(endpoint: &str, e: &FetchError) -> String {
    let what = match e {
        FetchError::Status { code: 403, .. } => "CMS permissions pending",
        _ => "CMS content not published yet",
    };
    let collection = endpoint
        .trim_start_matches('/')
        .trim_start_matches("api/")
        .split('?')
        .next()
        .unwrap_or(endpoint);
    format!("{what} for `{collection}` ({e})")
}

/// Section-lifetime view of one background load.
pub struct LoadHandle<T> {
    rx: watch::Receiver<Loaded<T>>,
    task: JoinHandle<()>,
}

impl<T: Clone> LoadHandle<T> {
    /// Latest state: fallback + `Loading` until the load finishes.
    pub fn current(&self) -> Loaded<T> {
        self.rx.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.rx.borrow().status.is_loading()
    }

    /// Wait for the load to finish. If the task died first, returns the last state seen.
    pub async fn resolved(mut self) -> Loaded<T> {
        loop {
            if !self.rx.borrow_and_update().status.is_loading() {
                break;
            }
            if self.rx.changed().await.is_err() {
                break;
            }
        }
        self.rx.borrow().clone()
    }

    /// Explicit teardown; same as dropping the handle.
    pub fn cancel(self) {}
}

impl<T> Drop for LoadHandle<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
