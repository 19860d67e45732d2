mod context;
mod modifier_error;
mod wrap;

pub use modifier_error::{
    GeneralError,
    InvalidArgumentsError,
    NotFoundError,
    general_error,
    invalid_arguments_error,
    not_found_error,
};
pub use wrap::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};
