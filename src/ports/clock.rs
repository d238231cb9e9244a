use chrono::NaiveDateTime;

/// Port for reading the local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}
