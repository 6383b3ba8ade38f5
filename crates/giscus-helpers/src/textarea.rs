//! Comment box auto-resize

/// Tallest the comment box grows before it starts scrolling, in pixels
pub const MAX_TEXTAREA_HEIGHT: u32 = 270;

/// A host text-input element that can be sized
pub trait TextArea {
    /// Height of the element's content, including overflow
    fn scroll_height(&self) -> u32;

    /// Set the rendered height in pixels
    fn set_height(&mut self, height: u32);
}

/// Fit the element's height to its content, capped at [`MAX_TEXTAREA_HEIGHT`].
///
/// The height is collapsed to zero first so `scroll_height` reflects the content
/// rather than the current size.
pub fn resize_text_area<T: TextArea + ?Sized>(textarea: &mut T) {
    resize_text_area_to(textarea, MAX_TEXTAREA_HEIGHT);
}

/// Fit the element's height to its content, capped at `max_height`
pub fn resize_text_area_to<T: TextArea + ?Sized>(textarea: &mut T, max_height: u32) {
    textarea.set_height(0);
    let height = textarea.scroll_height().min(max_height);
    textarea.set_height(height);
}
