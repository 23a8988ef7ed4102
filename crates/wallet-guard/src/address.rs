/// Check that an identity is a well-formed wallet address: a `0x` prefix
/// followed by exactly 40 ASCII hex characters (either case).
pub fn is_valid_address(identity: &str) -> bool {
    let Some(hex) = identity.strip_prefix("0x") else {
        return false;
    };
    hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}
