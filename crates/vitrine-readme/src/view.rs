//! Live view state for the currently selected project.
//!
//! Resolutions are asynchronous, so a slow fetch for a previously selected
//! project can complete after the user has already moved on. [`DetailView`]
//! guards against that: each selection bumps a generation counter and the
//! resolution continuation commits its result only while its generation is
//! still current.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use vitrine_catalog::ProjectRecord;

use crate::resolver::{ReadmeResolver, ResolvedContent};

/// What the detail view currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSnapshot {
    /// Slug of the selected project, `None` before the first selection
    pub slug: Option<String>,

    /// Content state for that selection
    pub content: ResolvedContent,
}

impl Default for DetailSnapshot {
    fn default() -> Self {
        Self {
            slug: None,
            content: ResolvedContent::Pending,
        }
    }
}

/// State guarded by the selection lock.
///
/// The generation check and the snapshot publish must happen under one lock,
/// otherwise a stale continuation could pass the check and then publish after
/// a newer selection.
struct Selection {
    generation: u64,
    tx: watch::Sender<DetailSnapshot>,
}

/// Holder for the per-view resolved content of the selected project.
#[derive(Clone)]
pub struct DetailView {
    resolver: Arc<ReadmeResolver>,
    selection: Arc<Mutex<Selection>>,
    rx: watch::Receiver<DetailSnapshot>,
}

impl DetailView {
    /// Create a view backed by the given resolver.
    pub fn new(resolver: ReadmeResolver) -> Self {
        let (tx, rx) = watch::channel(DetailSnapshot::default());
        Self {
            resolver: Arc::new(resolver),
            selection: Arc::new(Mutex::new(Selection { generation: 0, tx })),
            rx,
        }
    }

    /// Select a project and start resolving its content.
    ///
    /// Publishes a `Pending` snapshot immediately; the result is published
    /// later unless a newer selection supersedes it first.
    pub fn select(&self, record: &ProjectRecord) {
        let slug = record.slug();
        let generation = {
            let mut selection = self.selection.lock().expect("selection lock poisoned");
            selection.generation += 1;
            let _ = selection.tx.send_replace(DetailSnapshot {
                slug: Some(slug.clone()),
                content: ResolvedContent::Pending,
            });
            selection.generation
        };

        let resolver = Arc::clone(&self.resolver);
        let shared = Arc::clone(&self.selection);
        let record = record.clone();

        tokio::spawn(async move {
            let content = resolver.resolve(&record).await;

            let selection = shared.lock().expect("selection lock poisoned");
            if selection.generation == generation {
                let _ = selection.tx.send_replace(DetailSnapshot {
                    slug: Some(slug),
                    content,
                });
            } else {
                tracing::debug!(slug = %slug, "Discarding stale resolution result");
            }
        });
    }

    /// Discard the current selection.
    pub fn clear(&self) {
        let mut selection = self.selection.lock().expect("selection lock poisoned");
        selection.generation += 1;
        let _ = selection.tx.send_replace(DetailSnapshot::default());
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> DetailSnapshot {
        self.rx.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<DetailSnapshot> {
        self.rx.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn record(slug: &str, repository: &str) -> ProjectRecord {
        ProjectRecord {
            slug: Some(slug.to_string()),
            title: slug.to_string(),
            description: String::new(),
            technologies: vec![],
            image: None,
            repository: Some(repository.to_string()),
            inline_content: None,
        }
    }

    async fn wait_for_settled(rx: &mut watch::Receiver<DetailSnapshot>) -> DetailSnapshot {
        loop {
            let snapshot = rx.borrow_and_update().clone();
            if snapshot.content != ResolvedContent::Pending {
                return snapshot;
            }
            rx.changed().await.unwrap();
        }
    }

    #[tokio::test]
    async fn selection_goes_pending_then_resolved() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/acme/a/main/README.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("# A"))
            .mount(&server)
            .await;

        let view = DetailView::new(ReadmeResolver::with_raw_host(server.uri()));
        let mut rx = view.subscribe();

        view.select(&record("a", "https://github.com/acme/a"));

        let pending = view.snapshot();
        assert_eq!(pending.slug.as_deref(), Some("a"));
        assert_eq!(pending.content, ResolvedContent::Pending);

        let settled = wait_for_settled(&mut rx).await;
        assert_eq!(settled.slug.as_deref(), Some("a"));
        assert!(settled.content.html().unwrap().contains("<h1>A</h1>"));
    }

    #[tokio::test]
    async fn stale_resolution_does_not_overwrite_newer_selection() {
        let server = MockServer::start().await;

        // Project A's fetch is slow; project B's is instant.
        Mock::given(method("GET"))
            .and(path("/acme/a/main/README.md"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("# A")
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/acme/b/main/README.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("# B"))
            .mount(&server)
            .await;

        let view = DetailView::new(ReadmeResolver::with_raw_host(server.uri()));
        let mut rx = view.subscribe();

        view.select(&record("a", "https://github.com/acme/a"));
        view.select(&record("b", "https://github.com/acme/b"));

        let settled = wait_for_settled(&mut rx).await;
        assert_eq!(settled.slug.as_deref(), Some("b"));
        assert!(settled.content.html().unwrap().contains("<h1>B</h1>"));

        // Wait out A's delayed response; the visible state must still be B's.
        tokio::time::sleep(Duration::from_millis(400)).await;
        let after = view.snapshot();
        assert_eq!(after.slug.as_deref(), Some("b"));
        assert!(after.content.html().unwrap().contains("<h1>B</h1>"));
    }

    #[tokio::test]
    async fn clear_discards_pending_resolution() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/acme/a/main/README.md"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("# A")
                    .set_delay(Duration::from_millis(200)),
            )
            .mount(&server)
            .await;

        let view = DetailView::new(ReadmeResolver::with_raw_host(server.uri()));

        view.select(&record("a", "https://github.com/acme/a"));
        view.clear();

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(view.snapshot(), DetailSnapshot::default());
    }
}
