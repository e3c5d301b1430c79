//! Error macros for movierank

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::MovieError::invalid_value($context, $value))
    };
}
