pub mod format_converter;

pub use format_converter::FormatConverter;
