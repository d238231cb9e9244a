use crate::domain::Notice;

/// Port for the visible text surface showing the log.
pub trait LogSurface {
    /// Append a rendered record at the end of the surface.
    fn append(&mut self, record: &str);

    /// Move the visible position to the end.
    fn scroll_to_end(&mut self);

    /// Remove everything shown so far.
    fn clear(&mut self);
}

/// Port for presenting notices to the user.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}
