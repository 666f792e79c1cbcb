mod configuration_error;
mod error;
mod roster_error;

pub use configuration_error::ConfigurationError;
pub use error::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};
pub use roster_error::{
    GeneralError,
    NotFoundError,
    general_error,
    not_found_error,
};
