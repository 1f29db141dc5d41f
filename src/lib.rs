#![doc = include_str!("../README.md")]

#[macro_use]
mod macros;

pub mod array;
pub mod error;
pub mod iter;

pub use array::{GrowableArray, DEFAULT_CAPACITY};
pub use error::{Error, ErrorKind, Result};

/// Construct a [`GrowableArray`](crate::array::GrowableArray) from a sequence of elements
///
/// The array is sized to fit the elements exactly. With no elements, this is
/// [`GrowableArray::new`](crate::array::GrowableArray::new).
#[macro_export]
macro_rules! growable {
    () => { $crate::array::GrowableArray::new() };

    ( $($x:expr),+ $(,)? ) => {{
        $crate::array::GrowableArray::from(vec![$(
            $x,
        ) *])
    }};
}

#[cfg(test)]
pub(crate) fn init_logging() {
    use tracing_subscriber::EnvFilter;

    // Another test may have installed the subscriber already
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
