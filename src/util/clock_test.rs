#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn now_millis_is_after_2024() {
    assert!(now_millis() > 1_704_067_200_000);
}

#[test]
fn now_millis_does_not_go_backwards() {
    let first = now_millis();
    let second = now_millis();
    assert!(second >= first);
}
