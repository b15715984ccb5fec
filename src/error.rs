pub type FloretResult<T> = Result<T, FloretError>;

#[derive(thiserror::Error, Debug)]
pub enum FloretError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FloretError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            FloretError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(FloretError::render("x").to_string().contains("render error:"));
        assert!(
            FloretError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = FloretError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
