use alloc::rc::Rc;

/// A scrollable surface the list is windowed against (a DOM element, a TUI pane, ...).
///
/// The surface is a handle: cloning it or holding it must not affect the underlying element.
/// The adapter never scrolls the surface itself; it only reads the current offset when the host
/// forwards a scroll notification (see [`crate::FixedSizeList::on_scroll`]).
pub trait ScrollSurface {
    /// Current scroll distance from the top of the content.
    fn scroll_offset(&self) -> i64;

    /// Registers the native scroll listener. Called exactly once per attachment.
    fn listen(&self) {}

    /// Removes the listener registered by [`Self::listen`]. Called exactly once per attachment.
    fn unlisten(&self) {}
}

impl<T: ScrollSurface + ?Sized> ScrollSurface for &T {
    fn scroll_offset(&self) -> i64 {
        (**self).scroll_offset()
    }

    fn listen(&self) {
        (**self).listen();
    }

    fn unlisten(&self) {
        (**self).unlisten();
    }
}

impl<T: ScrollSurface + ?Sized> ScrollSurface for Rc<T> {
    fn scroll_offset(&self) -> i64 {
        (**self).scroll_offset()
    }

    fn listen(&self) {
        (**self).listen();
    }

    fn unlisten(&self) {
        (**self).unlisten();
    }
}

/// A surface bound to a list: listening for as long as the value lives.
pub(crate) struct Attachment<S: ScrollSurface> {
    surface: S,
}

impl<S: ScrollSurface> Attachment<S> {
    pub(crate) fn new(surface: S) -> Self {
        surface.listen();
        Self { surface }
    }

    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: ScrollSurface> Drop for Attachment<S> {
    fn drop(&mut self) {
        self.surface.unlisten();
    }
}
