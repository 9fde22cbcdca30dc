use super::breakpoint::SizeClass;
use super::scene::{SceneKind, SceneParams};

/// Two-state gate for an asynchronously loaded resource.
#[derive(Debug)]
pub enum AssetGate<H> {
    Loading,
    Ready(H),
}

impl<H> AssetGate<H> {
    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, AssetGate::Ready(_))
    }

    pub fn ready(&self) -> Option<&H> {
        match self {
            AssetGate::Ready(h) => Some(h),
            AssetGate::Loading => None,
        }
    }
}

/// What the renderer should draw for the next frame.
#[derive(Debug)]
pub enum Frame<'a, H> {
    Placeholder,
    Scene {
        params: &'static SceneParams,
        asset: &'a H,
    },
}

/// Render-side state of one mounted scene.
///
/// Parameters are re-applied only when the size class actually changes, and
/// frames are produced only while a redraw is pending.
#[derive(Debug)]
pub struct Stage<H> {
    kind: SceneKind,
    class: SizeClass,
    params: &'static SceneParams,
    gate: AssetGate<H>,
    redraw: bool,
    applied: u32,
    backing: Option<(u32, u32)>,
}

impl<H> Stage<H> {
    pub fn new(kind: SceneKind, class: SizeClass) -> Self {
        Self {
            kind,
            class,
            params: SceneParams::lookup(kind, class),
            gate: AssetGate::Loading,
            redraw: true,
            applied: 1,
            backing: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    #[inline]
    pub fn size_class(&self) -> SizeClass {
        self.class
    }

    #[inline]
    pub fn params(&self) -> &'static SceneParams {
        self.params
    }

    /// How many times a parameter record has been applied.
    #[inline]
    pub fn applied_count(&self) -> u32 {
        self.applied
    }

    #[inline]
    pub fn gate(&self) -> &AssetGate<H> {
        &self.gate
    }

    /// Apply a size class. Returns false (and does nothing) if unchanged.
    pub fn set_size_class(&mut self, class: SizeClass) -> bool {
        if class == self.class {
            return false;
        }
        self.class = class;
        self.params = SceneParams::lookup(self.kind, class);
        self.applied += 1;
        self.redraw = true;
        true
    }

    /// Drawing-buffer size last written to the canvas.
    #[inline]
    pub fn backing_size(&self) -> Option<(u32, u32)> {
        self.backing
    }

    /// Record the canvas drawing-buffer size. A size that differs from the
    /// last one schedules a redraw, whether or not the size class moved.
    pub fn set_backing_size(&mut self, size: (u32, u32)) -> bool {
        if self.backing == Some(size) {
            return false;
        }
        self.backing = Some(size);
        self.redraw = true;
        true
    }

    pub fn mark_ready(&mut self, handle: H) {
        self.gate = AssetGate::Ready(handle);
        self.redraw = true;
    }

    #[inline]
    pub fn invalidate(&mut self) {
        self.redraw = true;
    }

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Consume the pending redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.redraw, false)
    }

    /// Scenes that animate on their own keep the frame loop running once
    /// their asset is ready.
    pub fn wants_continuous(&self) -> bool {
        self.gate.is_ready()
            && (self.params.auto_rotate
                || self.params.float.is_some()
                || self.kind == SceneKind::Stars)
    }

    pub fn frame(&self) -> Frame<'_, H> {
        match &self.gate {
            AssetGate::Loading => Frame::Placeholder,
            AssetGate::Ready(asset) => Frame::Scene {
                params: self.params,
                asset,
            },
        }
    }
}
