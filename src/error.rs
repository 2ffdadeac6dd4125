/// A `Result` alias where the `Err` case is `randqueue::Error`.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{0} underflow")]
    Underflow(&'static str),
    #[error("iterator exhausted")]
    Exhausted,
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Fallible access to the next item of an iterator. Advancing past the
/// end yields `Error::Exhausted` instead of `None`.
pub trait TryNext: Iterator {
    fn try_next(&mut self) -> Result<Self::Item> {
        self.next().ok_or(Error::Exhausted)
    }
}

impl<I: Iterator + ?Sized> TryNext for I {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn try_next_reports_exhaustion() {
        let mut i = vec![1u8].into_iter();

        assert_eq!(1, i.try_next().unwrap());
        assert!(matches!(i.try_next(), Err(Error::Exhausted)));
        assert!(matches!(i.try_next(), Err(Error::Exhausted)));
    }

    #[test]
    fn messages() {
        assert_eq!("deque underflow", Error::Underflow("deque").to_string());
        assert_eq!(
            "invalid argument: k too large",
            Error::InvalidArgument("k too large".to_string()).to_string()
        );
    }
}
