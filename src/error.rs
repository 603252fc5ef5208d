// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    UnknownCategory(String),
    UnknownEffect(String),
    UnknownAnchor(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::UnknownCategory(name) => write!(
                f,
                "'{}' is not a valid category. Should be one of: primary, success, info, warning, danger",
                name
            ),
            Error::UnknownEffect(name) => {
                write!(f, "'{}' is not a valid effect. Should be one of: none, fade", name)
            }
            Error::UnknownAnchor(name) => write!(
                f,
                "'{}' is not a valid anchor. Should be one of: top, bottom, top-left, top-right, bottom-left, bottom-right",
                name
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn unknown_category_names_the_offender() {
        let err = Error::UnknownCategory("fatal".into());
        let rendered = format!("{}", err);
        assert!(rendered.contains("'fatal'"));
        assert!(rendered.contains("danger"));
    }

    #[test]
    fn unknown_effect_lists_alternatives() {
        let rendered = format!("{}", Error::UnknownEffect("wobble".into()));
        assert!(rendered.contains("fade"));
    }
}
