//! Site header state: scroll elevation, mobile menu, and search box.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use super::lifecycle::Subscription;
use crate::navigation::NavLink;

/// Header state.
///
/// `revision` counts actual changes so callers can skip re-rendering when an
/// event left everything as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderState {
    is_scrolled: bool,
    is_mobile_menu_open: bool,
    search_query: String,
    revision: u64,
}

impl HeaderState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the page has scrolled away from the top.
    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    #[must_use]
    pub const fn is_mobile_menu_open(&self) -> bool {
        self.is_mobile_menu_open
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply a vertical scroll offset. Returns whether the state changed.
    ///
    /// Overscroll (negative) and NaN offsets count as being at the top.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > 0.0;
        self.set(|state| &mut state.is_scrolled, scrolled)
    }

    /// Returns whether the state changed.
    pub fn set_mobile_menu_open(&mut self, open: bool) -> bool {
        self.set(|state| &mut state.is_mobile_menu_open, open)
    }

    pub fn toggle_mobile_menu(&mut self) {
        let open = !self.is_mobile_menu_open;
        self.set_mobile_menu_open(open);
    }

    /// Navigate via a menu entry or icon shortcut.
    ///
    /// Closes the mobile panel and returns the destination.
    pub fn follow(&mut self, link: &NavLink) -> &'static str {
        self.set_mobile_menu_open(false);
        link.href
    }

    /// Store the search box contents. Nothing consumes it yet.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.search_query {
            self.search_query = query;
            self.revision += 1;
        }
    }

    /// Start listening to scroll offsets.
    #[must_use]
    pub fn mount(self, mut scroll: watch::Receiver<f64>) -> MountedHeader {
        let shared = Arc::new(Mutex::new(Shared {
            header: self,
            detached: false,
        }));

        let listener_state = Arc::clone(&shared);
        let subscription = Subscription::spawn(async move {
            while scroll.changed().await.is_ok() {
                let offset = *scroll.borrow_and_update();
                let mut shared = lock(&listener_state);
                if shared.detached {
                    break;
                }
                shared.header.on_scroll(offset);
            }
        });

        MountedHeader {
            shared,
            subscription,
        }
    }

    fn set(&mut self, field: impl FnOnce(&mut Self) -> &mut bool, value: bool) -> bool {
        let slot = field(self);
        if *slot == value {
            return false;
        }
        *slot = value;
        self.revision += 1;
        true
    }
}

#[derive(Debug)]
struct Shared {
    header: HeaderState,
    detached: bool,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A header attached to a scroll source.
#[derive(Debug)]
pub struct MountedHeader {
    shared: Arc<Mutex<Shared>>,
    subscription: Subscription,
}

impl MountedHeader {
    #[must_use]
    pub fn snapshot(&self) -> HeaderState {
        lock(&self.shared).header.clone()
    }

    pub fn toggle_mobile_menu(&self) {
        lock(&self.shared).header.toggle_mobile_menu();
    }

    pub fn set_mobile_menu_open(&self, open: bool) -> bool {
        lock(&self.shared).header.set_mobile_menu_open(open)
    }

    pub fn follow(&self, link: &NavLink) -> &'static str {
        lock(&self.shared).header.follow(link)
    }

    /// Store the search box contents while the scroll listener keeps running.
    pub fn set_search_query(&self, query: impl Into<String>) {
        lock(&self.shared).header.set_search_query(query);
    }

    /// Remove the scroll listener and return the final state.
    #[must_use]
    pub fn unmount(mut self) -> HeaderState {
        self.detach()
    }

    fn detach(&mut self) -> HeaderState {
        self.subscription.cancel();
        let mut shared = lock(&self.shared);
        shared.detached = true;
        shared.header.clone()
    }
}

impl Drop for MountedHeader {
    fn drop(&mut self) {
        let _ = self.detach();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::navigation::{ICON_SHORTCUTS, PRIMARY_NAVIGATION};

    #[test]
    fn test_scroll_threshold() {
        let mut header = HeaderState::new();
        assert!(!header.is_scrolled());

        assert!(header.on_scroll(1.0));
        assert!(header.is_scrolled());

        assert!(header.on_scroll(0.0));
        assert!(!header.is_scrolled());

        assert!(header.on_scroll(0.5));
        assert!(header.on_scroll(-40.0));
        assert!(!header.is_scrolled());
        assert!(!header.on_scroll(f64::NAN));
    }

    #[test]
    fn test_repeated_scroll_is_idempotent() {
        let mut header = HeaderState::new();
        header.on_scroll(120.0);
        let revision = header.revision();

        assert!(!header.on_scroll(120.0));
        assert!(!header.on_scroll(300.0));
        assert_eq!(header.revision(), revision);
    }

    #[test]
    fn test_toggle_mobile_menu() {
        let mut header = HeaderState::new();
        header.toggle_mobile_menu();
        assert!(header.is_mobile_menu_open());
        header.toggle_mobile_menu();
        assert!(!header.is_mobile_menu_open());
        assert!(!header.set_mobile_menu_open(false));
    }

    #[test]
    fn test_follow_closes_menu() {
        for link in PRIMARY_NAVIGATION.iter().chain(ICON_SHORTCUTS.iter()) {
            let mut header = HeaderState::new();
            header.set_mobile_menu_open(true);
            assert_eq!(header.follow(link), link.href);
            assert!(!header.is_mobile_menu_open());
        }
    }

    #[test]
    fn test_search_query_is_stored_only() {
        let mut header = HeaderState::new();
        header.set_search_query("rolex");
        assert_eq!(header.search_query(), "rolex");
        assert!(!header.is_scrolled());
        assert!(!header.is_mobile_menu_open());
        assert_eq!(header.revision(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mounted_header_follows_scroll() {
        let (tx, rx) = watch::channel(0.0);
        let mounted = HeaderState::new().mount(rx);

        tx.send(48.0).unwrap();
        tokio::task::yield_now().await;
        assert!(mounted.snapshot().is_scrolled());

        tx.send(0.0).unwrap();
        tokio::task::yield_now().await;
        assert!(!mounted.snapshot().is_scrolled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_offset_twice_changes_nothing() {
        let (tx, rx) = watch::channel(0.0);
        let mounted = HeaderState::new().mount(rx);

        tx.send(10.0).unwrap();
        tokio::task::yield_now().await;
        let revision = mounted.snapshot().revision();

        tx.send(10.0).unwrap();
        tokio::task::yield_now().await;
        assert_eq!(mounted.snapshot().revision(), revision);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mounted_header_menu_and_search_interleave_with_scroll() {
        let (tx, rx) = watch::channel(0.0);
        let mounted = HeaderState::new().mount(rx);

        mounted.toggle_mobile_menu();
        mounted.set_search_query("cashmere");
        tx.send(64.0).unwrap();
        tokio::task::yield_now().await;

        let state = mounted.snapshot();
        assert!(state.is_mobile_menu_open());
        assert!(state.is_scrolled());
        assert_eq!(state.search_query(), "cashmere");

        let cart = ICON_SHORTCUTS.last().unwrap();
        assert_eq!(mounted.follow(cart), "/cart");
        assert!(!mounted.snapshot().is_mobile_menu_open());
        assert!(!mounted.set_mobile_menu_open(false));

        let final_state = mounted.unmount();
        assert_eq!(final_state.search_query(), "cashmere");
        assert!(final_state.is_scrolled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_removes_listener() {
        let (tx, rx) = watch::channel(0.0);
        let mounted = HeaderState::new().mount(rx);
        let shared = Arc::clone(&mounted.shared);

        let final_state = mounted.unmount();
        assert!(!final_state.is_scrolled());

        // The receiver is dropped with the aborted task.
        tokio::task::yield_now().await;
        let _ = tx.send(500.0);
        tokio::task::yield_now().await;
        assert!(!lock(&shared).header.is_scrolled());
    }
}
