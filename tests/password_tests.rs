use gitview::auth::password;

#[test]
fn hash_then_verify_roundtrip() {
    let hashed = password::hash("correct horse battery staple");
    assert!(password::verify("correct horse battery staple", &hashed));
}

#[test]
fn wrong_password_is_rejected() {
    let hashed = password::hash("correct horse battery staple");
    assert!(!password::verify("incorrect horse", &hashed));
    assert!(!password::verify("", &hashed));
}

#[test]
fn stored_value_never_contains_the_plaintext() {
    let plaintext = "correct horse battery staple";
    let hashed = password::hash(plaintext);
    assert_ne!(hashed, plaintext);
    assert!(!hashed.contains(plaintext));
    assert!(hashed.starts_with("pbkdf2-sha256$"));
}

#[test]
fn same_password_hashes_differently_per_salt() {
    let first = password::hash("hunter2hunter2");
    let second = password::hash("hunter2hunter2");
    assert_ne!(first, second, "salts must differ between hashes");
    assert!(password::verify("hunter2hunter2", &first));
    assert!(password::verify("hunter2hunter2", &second));
}

#[test]
fn malformed_stored_values_verify_false() {
    for stored in [
        "",
        "plaintext-password",
        "pbkdf2-sha256$",
        "pbkdf2-sha256$abc$AAAA$AAAA",
        "pbkdf2-sha256$0$AAAA$AAAA",
        "md5$1000$AAAA$AAAA",
        "pbkdf2-sha256$100000$!!!$AAAA",
        "pbkdf2-sha256$100000$AAAA$AAAA$extra",
    ] {
        assert!(
            !password::verify("whatever", stored),
            "accepted malformed stored value: {stored:?}"
        );
    }
}
