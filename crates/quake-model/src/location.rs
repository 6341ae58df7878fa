//! Free-text location references.

/// A record carrying a geographic reference such as
/// `"20 km al NE de Santiago"`.
///
/// The reference is read-only; consumers never modify the record.
pub trait LocationRecord {
    /// The free-text reference, exactly as received.
    fn reference(&self) -> &str;
}

impl LocationRecord for str {
    fn reference(&self) -> &str {
        self
    }
}

impl LocationRecord for String {
    fn reference(&self) -> &str {
        self.as_str()
    }
}

impl<T: LocationRecord + ?Sized> LocationRecord for &T {
    fn reference(&self) -> &str {
        (**self).reference()
    }
}
