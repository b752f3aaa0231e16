//! Error types for image-to-text conversion.

/// Errors that can occur while converting an image to ASCII art.
///
/// The first three variants describe bad input and are safe to show to the
/// user as-is. `ConversionFailed` means a collaborator (decoder, sampler,
/// filesystem) broke underneath us.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Invalid density ramp: ramp must contain at least one character")]
    InvalidRamp,

    #[error("Invalid scale {0}: must be a positive, finite number")]
    InvalidScale(f64),

    #[error("Conversion failed: {context}")]
    ConversionFailed {
        /// What was being attempted when the failure happened
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ConvertError {
    /// Wrap an underlying failure with a short description.
    pub fn failed<E>(context: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        ConvertError::ConversionFailed {
            context: context.into(),
            source: source.into(),
        }
    }

    /// True for validation failures caused by the caller's input.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, ConvertError::ConversionFailed { .. })
    }
}

/// Errors raised by an [`ImageSampler`](crate::ascii::ImageSampler).
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("cannot sample into a {width}x{height} grid")]
    EmptyTarget { width: u32, height: u32 },

    #[error("sampler backend error: {0}")]
    Backend(String),
}

impl From<SampleError> for ConvertError {
    fn from(err: SampleError) -> Self {
        ConvertError::failed("resampling image", err)
    }
}

/// Errors raised while writing rendered text.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_distinguishable() {
        assert!(ConvertError::InvalidRamp.is_input_error());
        assert!(ConvertError::InvalidImage("bad".into()).is_input_error());
        assert!(ConvertError::InvalidScale(0.0).is_input_error());

        let err = ConvertError::failed("decoding", "backend exploded");
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_sample_error_converts_with_source() {
        use std::error::Error;

        let err: ConvertError = SampleError::Backend("gpu lost".into()).into();
        assert!(matches!(err, ConvertError::ConversionFailed { .. }));
        let source = err.source().expect("cause should be attached");
        assert!(source.to_string().contains("gpu lost"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConvertError::InvalidScale(-1.0).to_string(),
            "Invalid scale -1: must be a positive, finite number"
        );
        assert!(ConvertError::InvalidRamp.to_string().contains("at least one character"));
    }
}
