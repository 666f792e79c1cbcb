use std::{
    fmt::{
        self,
        Arguments,
        Debug,
        Display,
    },
    panic::Location,
};

use anyhow::Error;

use crate::error::{
    general_error,
    not_found_error,
};

/// A context message, remembered with the source location that attached it.
struct LocatedMessage {
    message: String,
    location: &'static Location<'static>,
}

impl LocatedMessage {
    #[track_caller]
    fn new(message: impl Display) -> Self {
        Self {
            message: message.to_string(),
            location: Location::caller(),
        }
    }
}

impl Display for LocatedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for LocatedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.location)
    }
}

/// Converts an error into [`Error`].
pub trait WrapError {
    #[track_caller]
    fn wrap_error(self) -> Error;

    /// Converts the error, adding a context message.
    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Error
    where
        M: Display;
}

impl<E> WrapError for E
where
    E: Into<Error>,
{
    fn wrap_error(self) -> Error {
        self.into()
    }

    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Error
    where
        M: Display,
    {
        Into::<Error>::into(self).context(LocatedMessage::new(message))
    }
}

/// [`WrapError`] for the error side of a [`Result`].
pub trait WrapResultError<T> {
    #[track_caller]
    fn wrap_error(self) -> Result<T, Error>;

    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Result<T, Error>
    where
        M: Display;

    #[track_caller]
    fn wrap_error_with_format(self, args: Arguments<'_>) -> Result<T, Error>;
}

impl<T, E> WrapResultError<T> for Result<T, E>
where
    E: WrapError,
{
    #[track_caller]
    fn wrap_error(self) -> Result<T, Error> {
        self.map_err(WrapError::wrap_error)
    }

    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Result<T, Error>
    where
        M: Display,
    {
        let location = Location::caller();
        self.map_err(|error| {
            error.wrap_error().context(LocatedMessage {
                message: message.to_string(),
                location,
            })
        })
    }

    #[track_caller]
    fn wrap_error_with_format(self, args: Arguments<'_>) -> Result<T, Error> {
        self.wrap_error_with_message(args)
    }
}

/// Turns a missing value into an [`Error`].
pub trait WrapOptionError<T> {
    /// Fails with a [`GeneralError`][`crate::error::GeneralError`].
    #[track_caller]
    fn wrap_expectation<M>(self, message: M) -> Result<T, Error>
    where
        M: Display;

    /// Fails with a [`NotFoundError`][`crate::error::NotFoundError`] naming the target.
    #[track_caller]
    fn wrap_not_found_error<M>(self, target: M) -> Result<T, Error>
    where
        M: Display;
}

impl<T> WrapOptionError<T> for Option<T> {
    fn wrap_expectation<M>(self, message: M) -> Result<T, Error>
    where
        M: Display,
    {
        self.ok_or_else(|| general_error(message))
    }

    fn wrap_not_found_error<M>(self, target: M) -> Result<T, Error>
    where
        M: Display,
    {
        self.ok_or_else(|| not_found_error(target))
    }
}
