use std::fmt::Display;

use anyhow::Error;
use thiserror::Error;

use crate::error::WrapError;

/// An error consisting only of a message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GeneralError {
    message: String,
}

impl GeneralError {
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// A lookup that found nothing, such as an unregistered modifier type id.
#[derive(Error, Debug)]
#[error("{target} not found")]
pub struct NotFoundError {
    target: String,
}

impl NotFoundError {
    pub fn new<M>(target: M) -> Self
    where
        M: Display,
    {
        Self {
            target: target.to_string(),
        }
    }
}

/// A constructor argument list that does not decode into its modifier variant.
#[derive(Error, Debug)]
#[error("invalid arguments for {class_name}: {reason}")]
pub struct InvalidArgumentsError {
    class_name: String,
    reason: String,
}

impl InvalidArgumentsError {
    pub fn new<C, R>(class_name: C, reason: R) -> Self
    where
        C: Display,
        R: Display,
    {
        Self {
            class_name: class_name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// The class name of the variant being reconstructed.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

/// Helper for an [`struct@Error`] wrapping a [`GeneralError`].
#[track_caller]
pub fn general_error<M>(message: M) -> Error
where
    M: Display,
{
    GeneralError::new(message).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping a [`NotFoundError`].
#[track_caller]
pub fn not_found_error<M>(target: M) -> Error
where
    M: Display,
{
    NotFoundError::new(target).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping an [`InvalidArgumentsError`].
#[track_caller]
pub fn invalid_arguments_error<C, R>(class_name: C, reason: R) -> Error
where
    C: Display,
    R: Display,
{
    InvalidArgumentsError::new(class_name, reason).wrap_error()
}

#[cfg(test)]
mod modifier_error_test {
    use pretty_assertions::assert_eq;

    use crate::error::{
        InvalidArgumentsError,
        general_error,
        invalid_arguments_error,
        not_found_error,
    };

    #[test]
    fn formats_messages() {
        assert_eq!(general_error("bad stack").to_string(), "bad stack");
        assert_eq!(
            not_found_error("modifier type LEFTOVERS").to_string(),
            "modifier type LEFTOVERS not found"
        );
        assert_eq!(
            invalid_arguments_error("BerryModifier", "missing berryType").to_string(),
            "invalid arguments for BerryModifier: missing berryType"
        );
    }

    #[test]
    fn downcasts_invalid_arguments() {
        let error = invalid_arguments_error("BaseStatModifier", "missing stat");
        let error = error.downcast_ref::<InvalidArgumentsError>().unwrap();
        assert_eq!(error.class_name(), "BaseStatModifier");
    }
}
