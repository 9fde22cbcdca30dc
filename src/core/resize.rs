use super::breakpoint::{classify, SizeClass};

/// What the caller should do after a native resize notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notify {
    /// No frame is pending yet: schedule one.
    Schedule,
    /// A frame is already pending; this notification folds into it.
    Coalesced,
    /// The owning scene is gone; ignore.
    Detached,
}

/// Per-mount resize bookkeeping.
///
/// Native resize events can arrive many times per frame. Only the first one
/// after an idle frame asks for an animation frame; the classification pass
/// runs once in that frame and a new class is published only when it
/// differs from the current one.
#[derive(Debug)]
pub struct ResizeState {
    current: SizeClass,
    frame_pending: bool,
    detached: bool,
    passes: u32,
}

impl ResizeState {
    pub fn new(initial_width: f64) -> Self {
        Self {
            current: classify(initial_width),
            frame_pending: false,
            detached: false,
            passes: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> SizeClass {
        self.current
    }

    #[inline]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    #[inline]
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Number of classification passes run so far.
    #[inline]
    pub fn passes(&self) -> u32 {
        self.passes
    }

    pub fn notify(&mut self) -> Notify {
        if self.detached {
            return Notify::Detached;
        }
        if self.frame_pending {
            Notify::Coalesced
        } else {
            self.frame_pending = true;
            Notify::Schedule
        }
    }

    /// Run the classification pass for a fired animation frame.
    ///
    /// Returns the new class only when it changed. Stale frames that fire
    /// after `detach` do nothing.
    pub fn on_frame(&mut self, width: f64) -> Option<SizeClass> {
        if self.detached {
            return None;
        }
        self.frame_pending = false;
        self.passes += 1;
        let next = classify(width);
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }

    /// Tear down. Returns whether a frame was still pending so the caller
    /// can cancel it.
    pub fn detach(&mut self) -> bool {
        let was_pending = self.frame_pending;
        self.detached = true;
        self.frame_pending = false;
        was_pending
    }
}
