#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Wrong number of arguments")]
    Usage { program: String },

    #[error("Secure random source unavailable: {0}")]
    RandomSource(#[from] rand::Error),
}

impl TokenError {
    /// Message shown to the operator before exiting.
    pub fn remediation(&self) -> String {
        match self {
            TokenError::Usage { program } => {
                format!("Usage: {} YOUR_GITHUB_TOKEN", program)
            }
            TokenError::RandomSource(e) => format!(
                "ERROR: the cryptographic random source is not available ({}).\n\
                 \n\
                 The key and IV must come from the operating system CSPRNG.\n\
                 Make sure /dev/urandom (or getrandom(2)) is accessible to this process\n\
                 and run the command again.",
                e
            ),
        }
    }
}
