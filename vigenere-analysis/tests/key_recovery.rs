use vigenere_analysis::{
    alphabet, attack, cipher, kasiski, recover_with_length, AttackConfig, Key, Language, VigenereError,
};

const ENGLISH: &str = include_str!("fixtures/english.txt");
const PORTUGUESE: &str = include_str!("fixtures/portuguese.txt");

fn encrypt(text: &str, key: &str) -> String {
    cipher::encrypt(text, &Key::new(key).unwrap())
}

#[test]
fn test_recovers_english_keys() {
    for key in ["lemon", "crypt", "vault", "kasiski"] {
        let ciphertext = encrypt(ENGLISH, key);
        let report = attack(&ciphertext, Language::English, &AttackConfig::default()).unwrap();

        assert_eq!(report.key_length, key.len());
        assert_eq!(report.key.to_string(), key.to_uppercase());
        assert_eq!(report.decrypt(&ciphertext), ENGLISH);
    }
}

#[test]
fn test_recovers_portuguese_keys() {
    for key in ["chave", "porta", "segredo"] {
        let ciphertext = encrypt(PORTUGUESE, key);
        let report = attack(&ciphertext, Language::Portuguese, &AttackConfig::default()).unwrap();

        assert_eq!(report.key_length, key.len());
        assert_eq!(report.key.to_string(), key.to_uppercase());
    }
}

#[test]
fn test_known_length_recovers_composite_keys() {
    // Lengths with small divisors lose the Kasiski vote to those divisors,
    // but the column analysis is exact once the length is supplied.
    for key in ["keys", "lemons", "oracle", "bridge"] {
        let ciphertext = encrypt(ENGLISH, key);
        let report = recover_with_length(&ciphertext, Language::English, key.len()).unwrap();
        assert_eq!(report.key.to_string(), key.to_uppercase());
    }
}

#[test]
fn test_composite_key_estimate_divides_true_length() {
    let ciphertext = encrypt(ENGLISH, "lemons");
    let estimate = kasiski::estimate_key_length(&alphabet::clean_text(&ciphertext), 20, 10);
    assert_eq!(estimate, 2);
}

#[test]
fn test_ciphertext_structure_preserved() {
    let ciphertext = encrypt(ENGLISH, "lemon");
    assert_eq!(ciphertext.len(), ENGLISH.len());
    for (a, b) in ENGLISH.chars().zip(ciphertext.chars()) {
        if !alphabet::is_letter(a) {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn test_attack_is_deterministic() {
    let ciphertext = encrypt(PORTUGUESE, "chave");
    let config = AttackConfig::default();
    let first = attack(&ciphertext, Language::Portuguese, &config).unwrap();
    let second = attack(&ciphertext, Language::Portuguese, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_max_key_length_bounds_estimate() {
    let ciphertext = encrypt(ENGLISH, "kasiski");
    let config = AttackConfig::default().with_max_key_length(5);
    let report = attack(&ciphertext, Language::English, &config).unwrap();
    assert!(report.key_length <= 5);
}

#[test]
fn test_unsupported_language_rejected_before_analysis() {
    let result = "xx".parse::<Language>();
    assert_eq!(result, Err(VigenereError::UnsupportedLanguage("xx".to_string())));
}
