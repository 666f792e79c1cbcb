use std::fmt::Display;

use anyhow::Error;
use thiserror::Error;

/// An internal inconsistency described by a message.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct GeneralError(String);

/// A lookup of a species, move, or archetype that found nothing.
#[derive(Error, Debug)]
#[error("{0} not found")]
pub struct NotFoundError(String);

#[track_caller]
pub fn general_error<M>(message: M) -> Error
where
    M: Display,
{
    GeneralError(message.to_string()).into()
}

#[track_caller]
pub fn not_found_error<M>(target: M) -> Error
where
    M: Display,
{
    NotFoundError(target.to_string()).into()
}
