/// Keys the controller polls on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKey {
    Exit,
    ZoomIn,
    ZoomOut,
}

impl ControlKey {
    pub const ALL: &'static [Self] = &[Self::Exit, Self::ZoomIn, Self::ZoomOut];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing held; the buffer is unchanged.
    Idle,
    /// A zoom key was held and the buffer was re-rendered.
    Rendered,
    /// The exit key was held; the window should close.
    CloseRequested,
}
