//! Hero slideshow.
//!
//! Cycles through a fixed, ordered list of images. The active index starts at
//! zero and advances by one (wrapping) on every timer tick. Shoppers can jump
//! to a slide with the indicator buttons; that does not reset the timer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use thiserror::Error;
use tokio::time::{Instant, MissedTickBehavior};

use super::lifecycle::Subscription;

/// Errors from slideshow operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlideshowError {
    #[error("a slideshow needs at least one slide")]
    Empty,

    #[error("slide {index} is out of range for {len} slides")]
    OutOfRange { index: usize, len: usize },

    #[error("the rotation interval must be greater than zero")]
    ZeroInterval,
}

/// A single image in the slideshow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub src: String,
    pub alt: String,
    /// Set once the image failed to load. Hidden slides still take their
    /// turn in the rotation.
    pub hidden: bool,
}

impl Slide {
    #[must_use]
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            hidden: false,
        }
    }
}

/// Slideshow state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slideshow {
    slides: Vec<Slide>,
    current: usize,
    interval: Duration,
}

impl Slideshow {
    /// Create a slideshow positioned on the first slide.
    ///
    /// # Errors
    ///
    /// Returns `SlideshowError::Empty` if `slides` is empty and
    /// `SlideshowError::ZeroInterval` if `interval` is zero.
    pub fn new(slides: Vec<Slide>, interval: Duration) -> Result<Self, SlideshowError> {
        if slides.is_empty() {
            return Err(SlideshowError::Empty);
        }
        if interval.is_zero() {
            return Err(SlideshowError::ZeroInterval);
        }
        Ok(Self {
            slides,
            current: 0,
            interval,
        })
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; construction rejects empty slideshows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the visible slide.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Time between automatic advances.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Interval in whole milliseconds, as rendered into the page.
    #[must_use]
    pub fn interval_ms(&self) -> u128 {
        self.interval.as_millis()
    }

    /// Move to the next slide, wrapping after the last one.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.slides.len();
    }

    /// Jump to slide `index`.
    ///
    /// # Errors
    ///
    /// Returns `SlideshowError::OutOfRange` and leaves the slideshow unchanged
    /// if `index` is not a valid slide.
    pub fn select(&mut self, index: usize) -> Result<(), SlideshowError> {
        self.check(index)?;
        self.current = index;
        Ok(())
    }

    /// Whether slide `index` is the visible one.
    #[must_use]
    pub const fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Hide a slide whose image failed to load.
    ///
    /// # Errors
    ///
    /// Returns `SlideshowError::OutOfRange` if `index` is not a valid slide.
    pub fn mark_failed(&mut self, index: usize) -> Result<(), SlideshowError> {
        let len = self.slides.len();
        let slide = self
            .slides
            .get_mut(index)
            .ok_or(SlideshowError::OutOfRange { index, len })?;
        if !slide.hidden {
            tracing::debug!(index, src = %slide.src, "hero image failed to load, hiding slide");
            slide.hidden = true;
        }
        Ok(())
    }

    /// Start the rotation timer.
    ///
    /// The first advance happens one interval after mounting.
    #[must_use]
    pub fn mount(self) -> MountedSlideshow {
        let period = self.interval;
        let shared = Arc::new(Mutex::new(Shared {
            slideshow: self,
            detached: false,
        }));

        let timer_state = Arc::clone(&shared);
        let subscription = Subscription::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let mut shared = lock(&timer_state);
                if shared.detached {
                    break;
                }
                shared.slideshow.advance();
            }
        });

        MountedSlideshow {
            shared,
            subscription,
        }
    }

    const fn check(&self, index: usize) -> Result<(), SlideshowError> {
        if index < self.slides.len() {
            Ok(())
        } else {
            Err(SlideshowError::OutOfRange {
                index,
                len: self.slides.len(),
            })
        }
    }
}

#[derive(Debug)]
struct Shared {
    slideshow: Slideshow,
    detached: bool,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A slideshow with its rotation timer running.
#[derive(Debug)]
pub struct MountedSlideshow {
    shared: Arc<Mutex<Shared>>,
    subscription: Subscription,
}

impl MountedSlideshow {
    #[must_use]
    pub fn current(&self) -> usize {
        lock(&self.shared).slideshow.current()
    }

    /// Jump to a slide. The timer keeps its schedule.
    ///
    /// # Errors
    ///
    /// Returns `SlideshowError::OutOfRange` if `index` is not a valid slide.
    pub fn select(&self, index: usize) -> Result<(), SlideshowError> {
        lock(&self.shared).slideshow.select(index)
    }

    /// # Errors
    ///
    /// Returns `SlideshowError::OutOfRange` if `index` is not a valid slide.
    pub fn mark_failed(&self, index: usize) -> Result<(), SlideshowError> {
        lock(&self.shared).slideshow.mark_failed(index)
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Slideshow {
        lock(&self.shared).slideshow.clone()
    }

    /// Stop the timer and return the final state.
    #[must_use]
    pub fn unmount(mut self) -> Slideshow {
        self.detach()
    }

    fn detach(&mut self) -> Slideshow {
        self.subscription.cancel();
        let mut shared = lock(&self.shared);
        shared.detached = true;
        shared.slideshow.clone()
    }
}

impl Drop for MountedSlideshow {
    fn drop(&mut self) {
        let _ = self.detach();
    }
}
