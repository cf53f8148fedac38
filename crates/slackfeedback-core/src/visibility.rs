//! Open/collapsed state of the widget panel.
//!
//! The controller never touches global event sources. It exposes whether
//! the host should currently be watching for interactions outside the
//! widget, and the host feeds those interactions back as [`InteractionEvent`]s.

/// Notification callback for open/close transitions.
pub type VisibilityCallback = Box<dyn FnMut()>;

/// An interaction observed by the host while outside-click watching is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionEvent {
    /// Already handled by something else; must be ignored.
    pub consumed: bool,
    /// Target lies inside the widget's root region.
    pub inside: bool,
}

impl InteractionEvent {
    pub fn outside() -> Self {
        Self {
            consumed: false,
            inside: false,
        }
    }

    pub fn inside() -> Self {
        Self {
            consumed: false,
            inside: true,
        }
    }

    pub fn consumed(mut self) -> Self {
        self.consumed = true;
        self
    }
}

/// Tracks whether the panel is open and whether outside interactions are watched.
pub struct VisibilityController {
    open: bool,
    listening: bool,
    on_open: Option<VisibilityCallback>,
    on_close: Option<VisibilityCallback>,
}

impl VisibilityController {
    /// Starts open, without watching for outside interactions.
    pub fn new() -> Self {
        Self {
            open: true,
            listening: false,
            on_open: None,
            on_close: None,
        }
    }

    /// Set the callback invoked after the panel opens.
    pub fn with_on_open(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_open = Some(Box::new(callback));
        self
    }

    /// Set the callback invoked after the panel closes.
    pub fn with_on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the host should be watching for interactions outside the widget.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Close when open, open when closed.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.activate();
        }
    }

    /// Open the panel, notify, and start watching outside interactions.
    pub fn activate(&mut self) {
        self.open = true;
        self.listening = true;
        log::debug!("Feedback panel opened");
        if let Some(callback) = self.on_open.as_mut() {
            callback();
        }
    }

    /// Collapse the panel and stop watching outside interactions.
    ///
    /// The close notification fires only when the panel was open.
    pub fn close(&mut self) {
        let was_open = self.open;
        self.open = false;
        self.listening = false;

        if was_open {
            log::debug!("Feedback panel closed");
            if let Some(callback) = self.on_close.as_mut() {
                callback();
            }
        }
    }

    /// React to an interaction reported by the host.
    pub fn handle_outside_interaction(&mut self, event: InteractionEvent) {
        if !self.listening || event.consumed {
            return;
        }
        if !event.inside {
            self.close();
        }
    }
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VisibilityController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisibilityController")
            .field("open", &self.open)
            .field("listening", &self.listening)
            .finish_non_exhaustive()
    }
}
