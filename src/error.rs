/// Errors raised by the few fallible discovery operations. Decoding, encoding and merging of the
/// discovery parameters never fail and degrade to "value is absent" instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Sort token doesn't match any known sort order.
    #[error("Unsupported sort token: {0}")]
    UnknownSortToken(String),
    /// Path-shape pattern from the configuration cannot be compiled.
    #[error("Invalid discovery path pattern: {0}")]
    InvalidPathPattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::Error;
    use insta::assert_snapshot;

    #[test]
    fn can_format_errors() -> anyhow::Result<()> {
        assert_snapshot!(
            Error::UnknownSortToken("trending".to_string()),
            @"Unsupported sort token: trending"
        );

        let regex_error = regex::Regex::new("(").unwrap_err();
        let error = Error::from(regex_error);
        assert!(matches!(error, Error::InvalidPathPattern(_)));
        assert!(
            error
                .to_string()
                .starts_with("Invalid discovery path pattern: ")
        );

        Ok(())
    }
}
