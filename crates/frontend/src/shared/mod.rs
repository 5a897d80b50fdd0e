pub mod api_utils;
pub mod date_utils;
pub mod debounce;
pub mod error;
pub mod export;
pub mod form_validator;
pub mod notices;
pub mod number_format;
pub mod platform;
pub mod print;
pub mod table_utils;
pub mod theme;
