use super::*;

#[test]
fn issue_encodes_email_and_timestamp() {
    let token = SessionToken::issue("test@example.com", 1_700_000_000_000);
    let decoded = STANDARD.decode(token.as_str()).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), "test@example.com:1700000000000");
}

#[test]
fn issue_matches_known_encoding() {
    assert_eq!(SessionToken::issue("a", 1).as_str(), "YTox");
}

#[test]
fn issue_pads_like_btoa() {
    assert_eq!(SessionToken::issue("ab", 1).as_str(), "YWI6MQ==");
}

#[test]
fn different_timestamps_give_different_tokens() {
    assert_ne!(SessionToken::issue("a@b.c", 1), SessionToken::issue("a@b.c", 2));
}
