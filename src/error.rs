use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrobeError {
    UnparseableFrequency(String),
    FrequencyOutOfRange(i64),
    UnknownProperty(String),
    MalformedDescriptor(String),
    InvalidColor(String),
    Config(String),
    Output(String),
}

impl fmt::Display for StrobeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrobeError::UnparseableFrequency(raw) => {
                write!(f, "Frequency is not an integer: {:?}", raw)
            }
            StrobeError::FrequencyOutOfRange(freq) => {
                write!(f, "Frequency must be >= 1, got {}", freq)
            }
            StrobeError::UnknownProperty(name) => write!(f, "Unknown property: {}", name),
            StrobeError::MalformedDescriptor(msg) => {
                write!(f, "Malformed property descriptor: {}", msg)
            }
            StrobeError::InvalidColor(msg) => write!(f, "Invalid color: {}", msg),
            StrobeError::Config(msg) => write!(f, "Cannot load configuration: {}", msg),
            StrobeError::Output(msg) => write!(f, "Cannot write output: {}", msg),
        }
    }
}

impl std::error::Error for StrobeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = StrobeError::UnparseableFrequency("abc".to_string());
        assert_eq!(err.to_string(), "Frequency is not an integer: \"abc\"");

        let err = StrobeError::FrequencyOutOfRange(0);
        assert_eq!(err.to_string(), "Frequency must be >= 1, got 0");
    }
}
