//! End-to-end behavior of the request builder and its terminal operations.

use fixtura::{CharClass, CharSet, GenerationError, Vocabulary, between, length, modifier, up_to};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("fixtura=trace")
        .with_test_writer()
        .try_init();
}

#[test]
fn equal_integer_bounds_always_return_the_bound() {
    init_tracing();
    for _ in 0..100 {
        assert_eq!(between(5, 5).integer().unwrap(), 5);
    }
}

#[test]
fn integers_cover_negative_ranges() {
    let value = between(i64::from(i32::MIN), -1).integer().unwrap();
    assert!(value < 0);
}

#[test]
fn integer_rejects_bounds_beyond_i32() {
    let above_max = i64::from(i32::MAX) + 1;
    let below_min = i64::from(i32::MIN) - 1;
    assert!(matches!(
        up_to(above_max).integer(),
        Err(GenerationError::OutOfDomain(_))
    ));
    assert!(matches!(
        between(below_min, below_min).integer(),
        Err(GenerationError::OutOfDomain(_))
    ));
    // The same bounds are fine for the wider terminal.
    assert!(up_to(above_max).long().is_ok());
}

#[test]
fn min_greater_than_max_is_rejected_at_the_terminal() {
    let request = between(10, 1);
    assert!(matches!(
        request.long(),
        Err(GenerationError::OutOfDomain(_))
    ));
    assert!(matches!(
        request.alphanumeric(),
        Err(GenerationError::OutOfDomain(_))
    ));
}

#[test]
fn zero_length_returns_the_empty_string() {
    assert_eq!(length(0).alphanumeric().unwrap(), "");
}

#[test]
fn numeric_strings_contain_only_digits() {
    let value = length(10).numeric().unwrap();
    assert_eq!(value.chars().count(), 10);
    assert!(value.chars().all(|ch| ch.is_ascii_digit()));
}

#[test]
fn english_strings_contain_no_digits() {
    let value = length(100).english().unwrap();
    assert!(value.chars().all(|ch| ch.is_ascii_alphabetic()));
}

#[test]
fn ranged_string_length_stays_within_bounds() {
    for _ in 0..50 {
        let value = between(10, 100).alphanumeric().unwrap();
        let len = value.chars().count();
        assert!((10..=100).contains(&len));
    }
}

#[test]
fn negative_length_bound_is_rejected() {
    assert!(matches!(
        between(-1, 10).alphanumeric(),
        Err(GenerationError::OutOfDomain(_))
    ));
}

#[test]
fn unicode_strings_have_exact_char_length() {
    let value = length(50).unicode().unwrap();
    assert_eq!(value.chars().count(), 50);
}

#[test]
fn prefix_modifier_keeps_length_and_content() {
    let value = length(5).with(modifier::prefix("AB")).alphanumeric().unwrap();
    assert!(value.starts_with("AB"));
    assert_eq!(value.chars().count(), 5);
}

#[test]
fn modifiers_apply_in_registration_order() {
    // The suffix lands after the whole-string prefix, so it wins on the
    // overlapping tail position.
    let value = length(3)
        .with(modifier::prefix("AAA"))
        .with(modifier::suffix("Z"))
        .alphanumeric()
        .unwrap();
    assert_eq!(value, "AAZ");
}

#[test]
fn special_symbol_modifier_injects_a_symbol_without_changing_length() {
    let value = length(100)
        .with(modifier::special_symbol())
        .english()
        .unwrap();
    assert_eq!(value.chars().count(), 100);
    assert!(
        value.chars().any(|ch| !ch.is_ascii_alphabetic()),
        "no symbol injected into {value:?}"
    );
}

#[test]
fn spaces_modifier_adds_spaces_to_numeric_strings() {
    let value = length(100).with(modifier::spaces()).numeric().unwrap();
    assert!(value.contains(' '));
    assert_eq!(value.chars().count(), 100);
}

#[test]
fn oversized_prefix_fails_with_modifier_length_error() {
    let result = length(2).with(modifier::prefix("toolong")).alphanumeric();
    assert!(matches!(result, Err(GenerationError::ModifierLength(_))));
}

#[test]
fn requests_are_reusable_without_hidden_state() {
    let request = between(10, 20).with(modifier::suffix("!"));
    for _ in 0..10 {
        let value = request.alphanumeric().unwrap();
        assert!(value.ends_with('!'));
        let len = value.chars().count();
        assert!((10..=20).contains(&len));
    }
}

#[test]
fn explicit_vocabulary_overrides_the_process_default() {
    let mut vocabulary = Vocabulary::builtin();
    vocabulary.set(CharClass::Alphanumeric, CharSet::from_chars("x"));
    let value = length(8)
        .with_vocabulary(vocabulary)
        .alphanumeric()
        .unwrap();
    assert_eq!(value, "xxxxxxxx");
}

#[test]
fn explicit_batch_count_is_honored() {
    let batch = up_to(10).alphanumerics(5).unwrap();
    assert_eq!(batch.len(), 5);
    for value in &batch {
        assert!(value.chars().count() <= 10);
    }
}

#[test]
fn implicit_batch_count_is_between_1_and_100() {
    let batch = up_to(10).alphanumerics_batch().unwrap();
    assert!((1..=100).contains(&batch.len()));
}

#[test]
fn longs_batch_has_the_requested_size() {
    let values = between(-5, 5).longs(32).unwrap();
    assert_eq!(values.len(), 32);
    assert!(values.iter().all(|value| (-5..=5).contains(value)));
}
