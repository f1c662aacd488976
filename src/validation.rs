use crate::error::TokenError;

const DEFAULT_PROGRAM_NAME: &str = "token-encryptor";

/// Extracts the secret from `argv`. Exactly one positional argument is accepted;
/// its content is passed through unchanged.
pub fn validate_args<I>(args: I) -> Result<String, TokenError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let program = args
        .next()
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string());

    match (args.next(), args.next()) {
        (Some(secret), None) => Ok(secret),
        _ => Err(TokenError::Usage { program }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_validate_args() {
        // Exactly one argument
        assert_eq!(validate_args(argv(&["prog", "ghp_abc"])).unwrap(), "ghp_abc");
        assert_eq!(validate_args(argv(&["prog", ""])).unwrap(), "");
        assert_eq!(validate_args(argv(&["prog", "τοκεν 🔑"])).unwrap(), "τοκεν 🔑");

        // Wrong count
        assert!(validate_args(argv(&["prog"])).is_err());
        assert!(validate_args(argv(&["prog", "a", "b"])).is_err());
        assert!(validate_args(argv(&[])).is_err());
    }

    #[test]
    fn test_usage_keeps_program_name() {
        match validate_args(argv(&["./encrypt", "a", "b"])) {
            Err(TokenError::Usage { program }) => assert_eq!(program, "./encrypt"),
            other => panic!("expected usage error, got {:?}", other),
        }

        match validate_args(argv(&[])) {
            Err(TokenError::Usage { program }) => assert_eq!(program, DEFAULT_PROGRAM_NAME),
            other => panic!("expected usage error, got {:?}", other),
        }
    }
}
