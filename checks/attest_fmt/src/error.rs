//! Internal fault taxonomy for the rendering stage.
//!
//! None of these ever cross the crate boundary as an `Err`: the renderer
//! consumes them to build the diagnostic text it returns instead of the
//! formatted message.

/// A fault encountered while substituting arguments into a template.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum RenderError {
    /// Conversion and argument type do not match.
    Conversion {
        /// The conversion character (`d`, `f`, ...).
        conversion: char,
        /// Kind name of the offending argument.
        found: &'static str,
        /// Zero-based position of the offending argument.
        index: usize,
    },

    /// The conversion character is not recognized.
    UnknownConversion {
        /// The unrecognized character.
        conversion: char,
    },

    /// The template ends in the middle of a specifier.
    Truncated,

    /// A precision was given on a conversion that does not accept one.
    Precision {
        /// The conversion character.
        conversion: char,
    },

    /// A specifier refers past the end of the argument sequence.
    ///
    /// Padding normally prevents this; it remains in the taxonomy so a
    /// counting/parsing disagreement degrades instead of panicking.
    MissingArgument {
        /// Zero-based index of the absent argument.
        index: usize,
    },
}

impl RenderError {
    /// Category label used as the first line of the diagnostic text.
    pub(crate) fn category(&self) -> &'static str {
        match self {
            RenderError::Conversion { .. } => "conversion mismatch",
            RenderError::UnknownConversion { .. } => "unknown conversion",
            RenderError::Truncated => "truncated specifier",
            RenderError::Precision { .. } => "invalid precision",
            RenderError::MissingArgument { .. } => "missing argument",
        }
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Conversion {
                conversion,
                found,
                index,
            } => {
                write!(
                    f,
                    "conversion `%{conversion}` cannot format a {found} value (argument {index})"
                )
            }
            RenderError::UnknownConversion { conversion } => {
                write!(f, "unknown conversion `%{conversion}`")
            }
            RenderError::Truncated => {
                write!(f, "format string ends inside a specifier")
            }
            RenderError::Precision { conversion } => {
                write!(f, "conversion `%{conversion}` does not accept a precision")
            }
            RenderError::MissingArgument { index } => {
                write!(f, "specifier refers to argument {index}, which was not supplied")
            }
        }
    }
}

impl std::error::Error for RenderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels() {
        let err = RenderError::Conversion {
            conversion: 'd',
            found: "str",
            index: 0,
        };
        assert_eq!(err.category(), "conversion mismatch");
        assert_eq!(RenderError::Truncated.category(), "truncated specifier");
        assert_eq!(
            RenderError::MissingArgument { index: 3 }.category(),
            "missing argument"
        );
    }

    #[test]
    fn display_names_the_conversion_and_argument() {
        let err = RenderError::Conversion {
            conversion: 'd',
            found: "str",
            index: 0,
        };
        assert_eq!(
            err.to_string(),
            "conversion `%d` cannot format a str value (argument 0)"
        );
    }

    #[test]
    fn display_unknown_conversion() {
        let err = RenderError::UnknownConversion { conversion: 'q' };
        assert_eq!(err.to_string(), "unknown conversion `%q`");
    }
}
