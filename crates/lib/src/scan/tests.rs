use super::{operands, Instruction, ScanError, Scanner, Signal, State, Token, MAX_SIGNAL};

const CORRUPTED: &str = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
const TOGGLED: &str = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

fn scan(toggles: bool, input: &str) -> i64 {
    let mut scanner = Scanner::new(toggles);
    scanner.feed_str(input).unwrap();
    scanner.value()
}

#[test]
fn test_initial_state() {
    let scanner = Scanner::new(true);
    assert_eq!(scanner.state(), State::Scanning);
    assert_eq!(scanner.signal(), "");
    assert_eq!(scanner.value(), 0);
    assert!(!scanner.is_suppressed());
    assert!(scanner.toggle_enabled());
    assert!(!Scanner::new(false).toggle_enabled());
}

#[test]
fn test_corrupted_memory() {
    assert_eq!(scan(false, CORRUPTED), 161);
    // No valid toggles in the input, so enabling them changes nothing.
    assert_eq!(scan(true, CORRUPTED), 161);
}

#[test]
fn test_toggled_memory() {
    assert_eq!(scan(true, TOGGLED), 48);
    assert_eq!(scan(false, TOGGLED), 161);
}

#[test]
fn test_states_follow_signal() {
    let mut s = Scanner::new(true);

    let expected = [
        ('m', State::MatchedM, "m"),
        ('u', State::MatchedMu, "mu"),
        ('l', State::MatchedMul, "mul"),
        ('(', State::NumberA(0), "mul("),
        ('1', State::NumberA(1), "mul(1"),
        ('2', State::NumberA(2), "mul(12"),
        (',', State::NumberB(0), "mul(12,"),
        ('3', State::NumberB(1), "mul(12,3"),
        (')', State::Scanning, ""),
    ];

    for (c, state, signal) in expected {
        s.feed(c).unwrap();
        assert_eq!(s.state(), state, "after {c:?}");
        assert_eq!(s.signal(), signal, "after {c:?}");
    }

    assert_eq!(s.value(), 36);

    let expected = [
        ('d', State::MatchedD, "d"),
        ('o', State::MatchedDo, "do"),
        ('n', State::MatchedDon, "don"),
        ('\'', State::MatchedDonApos, "don'"),
        ('t', State::MatchedDont, "don't"),
        ('(', State::MatchedDontOpen, "don't("),
        (')', State::Scanning, ""),
    ];

    for (c, state, signal) in expected {
        s.feed(c).unwrap();
        assert_eq!(s.state(), state, "after {c:?}");
        assert_eq!(s.signal(), signal, "after {c:?}");
    }

    assert!(s.is_suppressed());

    s.feed_str("do(").unwrap();
    assert_eq!(s.state(), State::MatchedDoOpen);
    assert_eq!(s.signal(), "do(");
    s.feed(')').unwrap();
    assert_eq!(s.state(), State::Scanning);
    assert!(!s.is_suppressed());
}

#[test]
fn test_step_reports_instructions() {
    let mut s = Scanner::new(true);
    let mut out = Vec::new();

    for c in "mul(2,3)xdon't()do()".chars() {
        if let Some(instruction) = s.step(c).unwrap() {
            out.push(instruction);
        }
    }

    assert_eq!(
        out,
        [Instruction::Mul(2, 3), Instruction::Dont, Instruction::Do]
    );

    assert_eq!(Instruction::Mul(2, 3).to_string(), "mul(2,3)");
    assert_eq!(Instruction::Dont.to_string(), "don't()");
    assert_eq!(Instruction::Do.to_string(), "do()");
}

#[test]
fn test_value_never_decreases() {
    let mut s = Scanner::new(false);
    let mut last = 0;

    for c in CORRUPTED.chars().chain(TOGGLED.chars()) {
        s.feed(c).unwrap();
        assert!(s.value() >= last);
        last = s.value();
    }

    assert_eq!(last, 322);
}

#[test]
fn test_exact_tokens() {
    for input in [
        "mul(3, 4)",
        "mul(3,4 )",
        "mul (3,4)",
        "mul(3,4]",
        "mul[3,4)",
        "MUL(3,4)",
        "mul(,4)",
        "mul(3,)",
        "mul(-3,4)",
        "mul(3.0,4)",
        "mul(3,4",
    ] {
        assert_eq!(scan(false, input), 0, "{input}");
        assert_eq!(scan(true, input), 0, "{input}");
    }
}

#[test]
fn test_isolated_mul() {
    assert_eq!(scan(false, "mul(3,4)"), 12);
    assert_eq!(scan(true, "don't()do()mul(3,4)"), 12);
    assert_eq!(scan(true, "don't()do()don't()do()mul(3,4)"), 12);
    assert_eq!(scan(true, "do()mul(3,4)"), 12);
    assert_eq!(scan(true, "don't()mul(3,4)"), 0);
}

#[test]
fn test_dont_then_do_restores() {
    let mut s = Scanner::new(true);
    s.feed_str("mul(1,1)don't()mul(5,5)").unwrap();
    assert_eq!(s.value(), 1);
    assert!(s.is_suppressed());
    s.feed_str("do()mul(2,2)").unwrap();
    assert_eq!(s.value(), 5);
    assert!(!s.is_suppressed());
}

#[test]
fn test_toggles_disabled_are_noise() {
    let mut s = Scanner::new(false);

    for c in "don't()".chars() {
        s.feed(c).unwrap();
        assert_eq!(s.state(), State::Scanning);
        assert_eq!(s.signal(), "");
    }

    s.feed_str("mul(5,5)").unwrap();
    assert!(!s.is_suppressed());
    assert_eq!(s.value(), 25);
}

#[test]
fn test_near_miss_toggles() {
    assert_eq!(scan(true, "do_not()mul(2,2)"), 4);
    assert_eq!(scan(true, "dont()mul(2,2)"), 4);
    assert_eq!(scan(true, "don't(x)mul(2,2)"), 4);
    assert_eq!(scan(true, "don't()do ()mul(2,2)"), 0);
    assert_eq!(scan(true, "don't()do(mul(2,2)"), 0);
}

#[test]
fn test_digit_ceiling() {
    assert_eq!(scan(false, "mul(999,999)"), 998001);
    assert_eq!(scan(false, "mul(1234,5)"), 0);
    assert_eq!(scan(false, "mul(5,1234)"), 0);
    assert_eq!(scan(false, "mul(123,4567)mul(2,2)"), 4);
    // Leading zeroes are just digits.
    assert_eq!(scan(false, "mul(007,2)"), 14);

    let mut s = Scanner::with_max_digits(false, 5);
    s.feed_str("mul(12345,2)").unwrap();
    assert_eq!(s.value(), 24690);
}

#[test]
fn test_signal_too_long() {
    let mut s = Scanner::with_max_digits(false, usize::MAX);
    let input = "mul(12345678901234567890,1)";

    let mut failed = None;

    for (n, c) in input.chars().enumerate() {
        if let Err(error) = s.feed(c) {
            failed = Some((n, error));
            break;
        }
    }

    let Some((n, error)) = failed else {
        panic!("expected scan to fail");
    };

    assert_eq!(n, MAX_SIGNAL);
    assert!(n < input.len());

    match error {
        ScanError::SignalTooLong { signal, max } => {
            assert_eq!(max, MAX_SIGNAL);
            assert_eq!(signal.as_str(), "mul(1234567890123456");
        }
        error => panic!("unexpected error: {error}"),
    }

    // With the default ceiling the fourth digit rejects instead.
    let mut s = Scanner::new(false);
    s.feed_str(input).unwrap();
    assert_eq!(s.value(), 0);
}

#[test]
fn test_overflow() {
    // The largest instruction which fits in the signal.
    let instruction = "mul(9999999,9999999)";
    assert_eq!(instruction.len(), MAX_SIGNAL);

    let mut s = Scanner::with_max_digits(false, 7);
    s.feed_str(instruction).unwrap();
    assert_eq!(s.value(), 99999980000001);

    let mut failed = None;

    for _ in 0..100_000 {
        if let Err(error) = s.feed_str(instruction) {
            failed = Some(error);
            break;
        }
    }

    assert!(matches!(failed, Some(ScanError::Overflow { .. })));
    assert!(s.value() > i64::MAX - 99999980000001);

    // The failed instruction is discarded.
    assert_eq!(s.state(), State::Scanning);
    assert_eq!(s.signal(), "");
}

#[test]
fn test_malformed_instruction() {
    let cases = [
        ("mul(1,)", Token::Mul),
        ("mul(1,2", Token::Mul),
        ("do(", Token::Do),
        ("don't(", Token::Dont),
        ("do()", Token::Dont),
    ];

    for (signal, token) in cases {
        let mut s = Scanner::new(true);
        s.feed_str("mul(2,3)").unwrap();
        s.signal = Signal::from(signal).unwrap();

        assert_eq!(
            s.complete(token),
            Err(ScanError::MalformedInstruction {
                signal: Signal::from(signal).unwrap()
            }),
            "{signal}"
        );

        assert_eq!(s.value(), 6, "{signal}");
        assert!(!s.is_suppressed(), "{signal}");
    }

    assert_eq!(operands("mul(12,3)"), Some((12, 3)));
    assert_eq!(operands("mul(,1)"), None);
    assert_eq!(operands("mul(1;2)"), None);
    assert_eq!(operands("mux(1,2)"), None);
    assert_eq!(operands("mul(1,-2)"), None);
}

#[test]
fn test_reject_reprocesses_character() {
    // A rejected `m` starts a new instruction.
    assert_eq!(scan(false, "mmul(2,3)"), 6);
    assert_eq!(scan(false, "mumul(2,3)"), 6);
    assert_eq!(scan(false, "mul(2,mul(3,3)"), 9);
    // A rejected `d` starts a toggle inside a number.
    assert_eq!(scan(true, "mul(2,don't()mul(3,3)"), 0);
    assert_eq!(scan(true, "mul(2don't()mul(3,3)"), 0);
    assert_eq!(scan(true, "don't()mul(1do()mul(3,3)"), 9);
    // Or anywhere in the prefix.
    assert_eq!(scan(true, "mudon't()mul(3,3)"), 0);
    // Toggles starting a `mul`.
    assert_eq!(scan(true, "dmul(2,3)"), 6);
    assert_eq!(scan(true, "don'mul(2,3)"), 6);
    // A second `d` restarts a toggle.
    assert_eq!(scan(true, "don't()dodo()mul(2,2)"), 4);
    // Without toggles, a `d` is simply rejected.
    assert_eq!(scan(false, "mul(2,don't()mul(3,3)"), 9);
}

#[test]
fn test_rejection_clears_signal() {
    let mut s = Scanner::new(true);
    s.feed_str("mul(2").unwrap();
    assert_eq!(s.signal(), "mul(2");
    s.feed('x').unwrap();
    assert_eq!(s.signal(), "");
    assert_eq!(s.state(), State::Scanning);

    s.feed_str("mul(2").unwrap();
    s.feed('d').unwrap();
    assert_eq!(s.signal(), "d");
    assert_eq!(s.state(), State::MatchedD);
}

#[test]
fn test_truncated_at_end() {
    let mut s = Scanner::new(true);
    s.feed_str("mul(2,4)mul(3,").unwrap();
    assert_eq!(s.value(), 8);
    assert_eq!(s.state(), State::NumberB(0));
}

#[test]
fn test_non_ascii_is_noise() {
    assert_eq!(scan(true, "ümul(2,2)→mul(3,3)é"), 13);
    assert_eq!(scan(true, "mul(2,2→)"), 0);
}
