use std::fmt::{self, Debug, Display};
use std::io;

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Wrapper so `main` reports errors via `Display` instead of `Debug`.
pub struct DisplayError(Error);

impl Debug for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: Into<Error>> From<T> for DisplayError {
    fn from(display: T) -> Self {
        DisplayError(display.into())
    }
}

pub trait IoErrorExt {
    fn applies_to(&self) -> AppliesTo;
}

impl IoErrorExt for io::Error {
    fn applies_to(&self) -> AppliesTo {
        match self.kind() {
            io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset => AppliesTo::Connection,
            _ => AppliesTo::Listener,
        }
    }
}

/// Whether an accept-loop error condemns one connection or the whole listener.
pub enum AppliesTo {
    Connection,
    Listener,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_errors_do_not_stop_the_listener() {
        let e = io::Error::new(io::ErrorKind::ConnectionReset, "reset");
        assert!(matches!(e.applies_to(), AppliesTo::Connection));

        let e = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(e.applies_to(), AppliesTo::Listener));
    }
}
