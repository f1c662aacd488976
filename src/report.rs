use std::fmt::Write as _;

use crate::config::Config;
use crate::crypto::EncryptedToken;

pub const PROPERTY_NAME: &str = "ENCRYPTED_GITHUB_TOKEN";
pub const KEY_CONSTANT_NAME: &str = "encryptionKeyB64";

const RULE_WIDTH: usize = 60;

/// Builds the text printed after a successful encryption.
pub fn render(token: &EncryptedToken, config: &Config) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "Encryption complete!");
    let _ = writeln!(out, "{}", rule);

    let _ = writeln!(
        out,
        "\n1. Add this to your {} file (do NOT commit):\n",
        config.properties_file
    );
    let _ = writeln!(out, "{}={}", PROPERTY_NAME, token.encrypted);

    let _ = writeln!(
        out,
        "\n2. Hardcode this key in {} (it's safe to commit):\n",
        config.key_source_file
    );
    let _ = writeln!(out, "   val {} = \"{}\"", KEY_CONSTANT_NAME, token.key);

    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "\nNOTE:");
    let _ = writeln!(
        out,
        "- The encrypted token goes in {} (not committed)",
        config.properties_file
    );
    let _ = writeln!(
        out,
        "- The decryption key is hardcoded in {} (safe to commit)",
        config.key_source_file
    );
    let _ = writeln!(
        out,
        "- GitHub won't detect the encrypted token as a token pattern"
    );

    out
}
