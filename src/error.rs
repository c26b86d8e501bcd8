//! Error handling.

use core::alloc::LayoutError;
use core::fmt;

/// An enumeration of error types raised when obtaining raw storage
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// A memory allocation failed
    AllocError,
    /// The requested capacity cannot be represented
    CapacityLimit,
    /// The provided layout was not allocatable
    LayoutError(LayoutError),
}

impl StorageError {
    /// Generic description of this error
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllocError => "Allocation error",
            Self::CapacityLimit => "Exceeded storage capacity limit",
            Self::LayoutError(_) => "Layout error",
        }
    }

    /// Generate a panic with this error as the reason
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}", self.as_str());
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LayoutError> for StorageError {
    fn from(err: LayoutError) -> Self {
        Self::LayoutError(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StorageError {}

/// An error raised when an element position lies outside of the live
/// range of a vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexError {
    pub(crate) index: usize,
    pub(crate) length: usize,
}

impl IndexError {
    pub(crate) const fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }

    /// Generic description of this error
    pub fn as_str(&self) -> &'static str {
        "Invalid element index"
    }

    /// The position which was requested
    pub fn index(&self) -> usize {
        self.index
    }

    /// The length of the vector at the time of the request
    pub fn length(&self) -> usize {
        self.length
    }

    /// Generate a panic with this error as the reason
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}: {} (length {})", self.as_str(), self.index, self.length);
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (length {})", self.as_str(), self.index, self.length)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IndexError {}

/// The reason an insertion could not be completed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsertionErrorKind {
    /// Storage for the new element could not be obtained
    Storage(StorageError),
    /// The insertion position was past the end of the vector
    Index(IndexError),
}

impl fmt::Display for InsertionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(err) => fmt::Display::fmt(err, f),
            Self::Index(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl From<StorageError> for InsertionErrorKind {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

impl From<IndexError> for InsertionErrorKind {
    fn from(err: IndexError) -> Self {
        Self::Index(err)
    }
}

/// An error raised by insertion operations when the element could not be
/// placed. Includes the value that was to be inserted.
#[derive(Clone)]
pub struct InsertionError<T> {
    pub(crate) error: InsertionErrorKind,
    pub(crate) value: T,
}

impl<T> InsertionError<T> {
    pub(crate) fn new(error: impl Into<InsertionErrorKind>, value: T) -> Self {
        Self {
            error: error.into(),
            value,
        }
    }

    /// Generic description of this error
    pub fn as_str(&self) -> &'static str {
        "Insertion error"
    }

    /// Get a reference to the cause of this error
    pub fn error(&self) -> &InsertionErrorKind {
        &self.error
    }

    /// Unwrap the inner value of this error
    pub fn into_value(self) -> T {
        self.value
    }

    /// Generate a panic with this error as the reason
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}: {}", self.as_str(), self.error);
    }
}

impl<T> fmt::Debug for InsertionError<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertionError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for InsertionError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{}: {}", self.as_str(), self.error))
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for InsertionError<T> {}
