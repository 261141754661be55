//! Error type definitions for streaming transform operations

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

use core::fmt;

/// Primary error type for streaming transform operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        /// Operation that rejected the key
        context: &'static str,
        #[cfg(any(feature = "std", feature = "alloc"))]
        /// Human-readable reason
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        /// Operation that rejected the input
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Operation that rejected the parameter
        context: &'static str,
        #[cfg(any(feature = "std", feature = "alloc"))]
        /// Human-readable reason
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        /// Operation that failed to obtain randomness
        context: &'static str,
    },

    /// Other error
    Other {
        /// Operation that failed
        context: &'static str,
        #[cfg(any(feature = "std", feature = "alloc"))]
        /// Human-readable reason
        message: String,
    },
}

/// Result type for streaming transform operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { .. } => Self::InvalidKey {
                context,
                #[cfg(any(feature = "std", feature = "alloc"))]
                message: String::new(),
            },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(any(feature = "std", feature = "alloc"))]
                message: String::new(),
            },
            Self::RandomGenerationError { .. } => Self::RandomGenerationError { context },
            Self::Other { .. } => Self::Other {
                context,
                #[cfg(any(feature = "std", feature = "alloc"))]
                message: String::new(),
            },
        }
    }

    /// Whether the error is caller-correctable (a validation failure)
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidKey { .. } | Self::InvalidLength { .. } | Self::InvalidParameter { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(any(feature = "std", feature = "alloc"))]
            Error::InvalidKey { context, message } => {
                write!(f, "Invalid key for {}: {}", context, message)
            }
            #[cfg(not(any(feature = "std", feature = "alloc")))]
            Error::InvalidKey { context } => write!(f, "Invalid key for {}", context),
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            #[cfg(any(feature = "std", feature = "alloc"))]
            Error::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter for {}: {}", context, message)
            }
            #[cfg(not(any(feature = "std", feature = "alloc")))]
            Error::InvalidParameter { context } => {
                write!(f, "Invalid parameter for {}", context)
            }
            Error::RandomGenerationError { context } => {
                write!(f, "Random generation failed in {}", context)
            }
            #[cfg(any(feature = "std", feature = "alloc"))]
            Error::Other { context, message } => write!(f, "Error in {}: {}", context, message),
            #[cfg(not(any(feature = "std", feature = "alloc")))]
            Error::Other { context } => write!(f, "Error in {}", context),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
