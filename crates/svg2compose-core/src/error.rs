pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Malformed XML: {message}")]
    MalformedXml { message: String },

    #[error("Root element is <{tag}>, expected <svg>")]
    NotAnSvgRoot { tag: String },

    #[error("Malformed path data ({message}) near \"{near}\"")]
    MalformedPathData { message: String, near: String },

    #[error("Unknown path command '{command}' at offset {offset}")]
    UnknownPathCommand { command: char, offset: usize },

    #[error("Invalid hex color format: {value}")]
    InvalidColorFormat { value: String },

    #[error("Color channel {channel} out of range [0, 255]: {value}")]
    ChannelOutOfRange { channel: &'static str, value: i64 },

    #[error("Unsupported color format: {value}")]
    UnsupportedColorFormat { value: String },

    #[error("Invalid image vector dimensions: {message}")]
    InvalidDimensions { message: String },
}
