use addrcheck_core::{classify, classify_input, AddressFormat, ValidationError, FORMAT_RULES};

const SAMPLES: &[&str] = &[
    "",
    " ",
    "\t\r\n",
    "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
    "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy",
    "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq",
    "bc1p5cyxnuxmeuwuvkwfem96lqzszd02n6xdcjrs20cac6yqjjwudpxqkedrcr",
    "0xAbC123",
    "2MsLZ5FqqYpjM1Q1W4X81zMVZTF9gdbhVwd",
    "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx",
    "1",
    "bc1",
    "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa\n1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
];

fn bech32_body(n: usize) -> String {
    "ac0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vqzk5jj0"
        .chars()
        .cycle()
        .take(n)
        .collect()
}

#[test]
fn test_known_addresses() {
    let cases = [
        ("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", "Legacy P2PKH (Pay-to-Public-Key-Hash)"),
        ("3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy", "Legacy P2SH (Pay-to-Script-Hash)"),
        (
            "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq",
            "Bech32 SegWit (Native SegWit)",
        ),
        (
            "bc1p5cyxnuxmeuwuvkwfem96lqzszd02n6xdcjrs20cac6yqjjwudpxqkedrcr",
            "Bech32 SegWit (Native SegWit)",
        ),
    ];

    for (address, label) in cases {
        let format = classify(address).unwrap();
        assert_eq!(format.label(), label, "{}", address);
    }
}

#[test]
fn test_bech32_length_bounds() {
    for n in 0..70 {
        let address = format!("bc1{}", bech32_body(n));
        let expected = if (39..=59).contains(&n) {
            Ok(AddressFormat::Bech32Segwit)
        } else {
            Err(ValidationError::FormatMismatch)
        };
        assert_eq!(classify(&address), expected, "body length {}", n);
    }
}

#[test]
fn test_taproot_rule_unreachable_through_classify() {
    for n in 0..70 {
        let address = format!("bc1p{}", bech32_body(n));
        assert_ne!(classify(&address), Ok(AddressFormat::Taproot), "body length {}", n);
    }
    // The rule itself still recognizes the shape.
    let taproot = format!("bc1p{}", bech32_body(58));
    assert!(FORMAT_RULES[3].matches(&taproot));
}

#[test]
fn test_failures_carry_stable_messages() {
    assert_eq!(classify("   ").unwrap_err().message(), "Address is required");
    assert_eq!(classify_input(None).unwrap_err().message(), "Address is required");
    assert_eq!(
        classify("0xAbC123").unwrap_err().message(),
        "Invalid Bitcoin address format"
    );
}

#[test]
fn test_testnet_and_multiline_rejected() {
    assert_eq!(
        classify("tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx"),
        Err(ValidationError::FormatMismatch)
    );
    assert_eq!(
        classify("2MsLZ5FqqYpjM1Q1W4X81zMVZTF9gdbhVwd"),
        Err(ValidationError::FormatMismatch)
    );
    assert_eq!(classify(SAMPLES[12]), Err(ValidationError::FormatMismatch));
}

#[test]
fn test_repeated_calls_agree() {
    for sample in SAMPLES {
        let first = classify(sample);
        for _ in 0..3 {
            assert_eq!(classify(sample), first, "{:?}", sample);
        }
    }
}

#[test]
fn test_concurrent_callers_agree() {
    let expected: Vec<_> = SAMPLES.iter().map(|s| classify(s)).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| SAMPLES.iter().map(|s| classify(s)).collect::<Vec<_>>()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
