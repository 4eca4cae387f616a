//! Host capabilities used to show a share link to the user.
//!
//! The library never opens windows itself. A [`Host`] hands out a
//! [`WindowOpener`] and, for hosts that only allow popups in direct response
//! to a user gesture, the [`RenderSurface`] those gestures land on.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Window settings for [`LinkBuilder::open`](crate::LinkBuilder::open).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopupConfig {
    pub width: u32,
    pub height: u32,
    /// Window target name. Empty opens a sized popup, `_blank` a new tab.
    pub mode: String,
    /// Wait for the next pointer or touch release on the primary surface
    /// instead of opening right away.
    pub is_canvas: bool,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mode: String::new(),
            is_canvas: false,
        }
    }
}

impl PopupConfig {
    /// Window features passed along with the target. Only a popup without a
    /// named target gets a size.
    pub fn features(&self) -> String {
        if self.mode.is_empty() {
            format!("width={},height={}", self.width, self.height)
        } else {
            String::new()
        }
    }

    pub fn request(&self, url: String) -> WindowRequest {
        WindowRequest {
            url,
            target: self.mode.clone(),
            features: self.features(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowRequest {
    pub url: String,
    pub target: String,
    pub features: String,
}

/// Opens a new window or tab. Fire and forget.
pub trait WindowOpener {
    fn open_window(&self, request: &WindowRequest);
}

/// Environment a share link is opened in.
pub trait Host {
    fn window(&self) -> Rc<dyn WindowOpener>;

    /// The surface user gestures are delivered to, if the host has one.
    fn primary_surface(&self) -> Option<Rc<RenderSurface>> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEvent {
    PointerDown,
    PointerMove,
    PointerUp,
    TouchStart,
    TouchEnd,
}

impl InteractionEvent {
    /// Whether the event ends a gesture: a pointer release or a touch end.
    pub fn is_release(self) -> bool {
        matches!(self, Self::PointerUp | Self::TouchEnd)
    }
}

/// What [`LinkBuilder::open`](crate::LinkBuilder::open) did with the window
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    /// Waiting for the next release event on the primary surface.
    Deferred,
    /// Deferred opening was requested but the host has no surface, so no
    /// window will open.
    NoSurface,
}

type ReleaseHandler = Box<dyn FnOnce()>;

/// A rendering surface holding at most one pending release handler.
///
/// The host feeds its pointer and touch events to [`RenderSurface::dispatch`].
/// The handler runs on the first release event and is dropped afterwards.
#[derive(Default)]
pub struct RenderSurface {
    handler: RefCell<Option<ReleaseHandler>>,
}

impl RenderSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `handler` for the next release event. Returns `true` when it
    /// replaced a handler that had not fired yet.
    pub fn subscribe_once(&self, handler: impl FnOnce() + 'static) -> bool {
        self.handler.borrow_mut().replace(Box::new(handler)).is_some()
    }

    /// Drops the pending handler. Safe to call when there is none.
    pub fn unsubscribe(&self) -> bool {
        self.handler.borrow_mut().take().is_some()
    }

    pub fn is_subscribed(&self) -> bool {
        self.handler.borrow().is_some()
    }

    /// Delivers a user interaction event. Returns `true` if a handler ran.
    pub fn dispatch(&self, event: InteractionEvent) -> bool {
        if !event.is_release() {
            return false;
        }

        // Released before the call so the handler may subscribe again.
        let handler = self.handler.borrow_mut().take();
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for RenderSurface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RenderSurface")
            .field("subscribed", &self.is_subscribed())
            .finish()
    }
}
