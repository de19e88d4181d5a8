// ops_test.rs - Integration tests for the nullable operation set.
//
// Exercises the null-handling table row by row, the bounds and aliasing
// contracts, and the behavioral scenarios on the reference text.

use svelto::error::Error;
use svelto::ops;
use svelto::text::Text;

const TEXT: &str = "    Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
                    sed do eiusmod tempor incididunt ut labore et dolore magna aliqua       ";
const TEXT_2: &str = "    Lorem ipsum dolor sit omet, consectetur adipiscing elit, \
                      sed do eiusmod tempor incididunt ut labore et dolore magna aliqua       ";

fn text() -> Text {
    Text::from(TEXT)
}

// === Null-handling table ===

#[test]
fn null_receiver_is_always_an_error() {
    assert_eq!(ops::substring(None, 0, None), Err(Error::NullInput));
    assert_eq!(ops::to_lower(None), Err(Error::NullInput));
    assert_eq!(ops::to_upper(None), Err(Error::NullInput));
    assert_eq!(ops::trim(None), Err(Error::NullInput));
    assert_eq!(ops::trim_start(None), Err(Error::NullInput));
    assert_eq!(ops::trim_end(None), Err(Error::NullInput));
    assert_eq!(ops::compare_to(None, None), Err(Error::NullInput));
    assert_eq!(ops::compare_part(None, 0, None, 0, 1), Err(Error::NullInput));
    assert_eq!(ops::contains(None, None), Err(Error::NullInput));
    assert_eq!(ops::index_of(None, None), Err(Error::NullInput));
    assert_eq!(ops::last_index_of(None, None), Err(Error::NullInput));
    assert_eq!(ops::split_to_strings(None, None), Err(Error::NullInput));
    assert_eq!(ops::split_to_ints(None, None), Err(Error::NullInput));
    assert_eq!(
        ops::split_and_transform(None, None, |span: Text| span).map(|_| ()),
        Err(Error::NullInput)
    );
}

#[test]
fn null_comparison_argument_is_plus_one() {
    let t = text();
    assert_eq!(ops::compare_to(Some(&t), None), Ok(1));
    assert_eq!(ops::compare_part(Some(&t), 0, None, 0, 5), Ok(1));
}

#[test]
fn null_needle_is_not_found() {
    let t = text();
    assert_eq!(ops::index_of(Some(&t), None), Ok(ops::NOT_FOUND));
    assert_eq!(ops::last_index_of(Some(&t), None), Ok(ops::NOT_FOUND));
}

#[test]
fn null_contains_needle_is_an_argument_error() {
    let t = text();
    assert_eq!(
        ops::contains(Some(&t), None),
        Err(Error::NullArgument { param: "part" })
    );
}

#[test]
fn null_delimiter_substitutes_a_space() {
    let t = Text::from("a b c");
    let parts = ops::split_to_strings(Some(&t), None).unwrap();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "a");
    assert_eq!(parts[2], "c");
}

// === Substring ===

#[test]
fn substring_from_start_offset() {
    let t = text();
    let sub = ops::substring(Some(&t), 5, None).unwrap();
    assert_eq!(sub.as_bytes(), &TEXT.as_bytes()[5..]);
}

#[test]
fn substring_with_length() {
    let t = text();
    let sub = ops::substring(Some(&t), 5, Some(15)).unwrap();
    assert_eq!(sub.as_bytes(), &TEXT.as_bytes()[5..20]);
    assert_eq!(sub.len(), 15);
}

#[test]
fn substring_start_past_end_is_a_range_error() {
    let t = text();
    assert_eq!(
        ops::substring(Some(&t), t.len() + 5, None),
        Err(Error::Range { param: "start" })
    );
}

#[test]
fn substring_length_past_end_is_a_range_error() {
    let t = text();
    assert_eq!(
        ops::substring(Some(&t), t.len() - 5, Some(10)),
        Err(Error::Range { param: "len" })
    );
}

#[test]
fn substring_at_length_is_the_empty_remainder() {
    let t = text();
    let sub = ops::substring(Some(&t), t.len(), None).unwrap();
    assert!(sub.is_empty());
}

#[test]
fn substring_zero_length_is_empty() {
    let t = text();
    assert!(ops::substring(Some(&t), 7, Some(0)).unwrap().is_empty());
}

#[test]
fn substring_full_range_aliases_the_input() {
    let t = text();
    let sub = ops::substring(Some(&t), 0, Some(t.len())).unwrap();
    assert_eq!(sub.as_ptr(), t.as_ptr());
    let sub = ops::substring(Some(&t), 0, None).unwrap();
    assert_eq!(sub.as_ptr(), t.as_ptr());
}

#[test]
fn substring_partial_range_copies() {
    let t = text();
    let sub = ops::substring(Some(&t), 0, Some(4)).unwrap();
    assert_ne!(sub.as_ptr(), t.as_ptr());
    assert_eq!(sub, "    ");
}

// === Case conversion ===

#[test]
fn to_lower_matches_ascii_lowercase() {
    let t = text();
    let lower = ops::to_lower(Some(&t)).unwrap();
    assert_eq!(lower, TEXT.to_lowercase().as_str());
}

#[test]
fn to_upper_matches_ascii_uppercase() {
    let t = text();
    let upper = ops::to_upper(Some(&t)).unwrap();
    assert_eq!(upper, TEXT.to_uppercase().as_str());
}

#[test]
fn to_lower_is_idempotent_on_ascii() {
    let t = text();
    let once = ops::to_lower(Some(&t)).unwrap();
    let twice = ops::to_lower(Some(&once)).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn case_conversion_leaves_non_ascii_untouched() {
    let t = Text::from("Grüße 123 ÉÀ");
    let lower = ops::to_lower(Some(&t)).unwrap();
    // only the ASCII letters fold; the multi-byte units pass through
    assert_eq!(lower, "grüße 123 ÉÀ");
    let upper = ops::to_upper(Some(&t)).unwrap();
    assert_eq!(upper, "GRüßE 123 ÉÀ");
}

// === Trim ===

#[test]
fn trim_strips_both_edge_runs() {
    let t = text();
    assert_eq!(ops::trim(Some(&t)).unwrap(), TEXT.trim_matches(' '));
}

#[test]
fn trim_start_strips_leading_run_only() {
    let t = text();
    assert_eq!(
        ops::trim_start(Some(&t)).unwrap(),
        TEXT.trim_start_matches(' ')
    );
}

#[test]
fn trim_end_strips_trailing_run_only() {
    let t = text();
    assert_eq!(ops::trim_end(Some(&t)).unwrap(), TEXT.trim_end_matches(' '));
}

#[test]
fn trim_leaves_interior_spacing_untouched() {
    let t = Text::from("  a  b   c  ");
    assert_eq!(ops::trim(Some(&t)).unwrap(), "a  b   c");
}

#[test]
fn trim_composes_either_way() {
    let t = text();
    let start_then_end = ops::trim_end(Some(&ops::trim_start(Some(&t)).unwrap())).unwrap();
    let end_then_start = ops::trim_start(Some(&ops::trim_end(Some(&t)).unwrap())).unwrap();
    let both = ops::trim(Some(&t)).unwrap();
    assert_eq!(both, start_then_end);
    assert_eq!(both, end_then_start);
}

#[test]
fn trim_all_spaces_is_empty() {
    let t = Text::from("      ");
    assert!(ops::trim(Some(&t)).unwrap().is_empty());
    assert!(ops::trim_start(Some(&t)).unwrap().is_empty());
    assert!(ops::trim_end(Some(&t)).unwrap().is_empty());
}

#[test]
fn trim_ignores_other_whitespace() {
    let t = Text::from("\tx\n ");
    assert_eq!(ops::trim(Some(&t)).unwrap(), "\tx\n");
}

#[test]
fn trim_nothing_to_strip_aliases() {
    let t = Text::from("solid");
    assert_eq!(ops::trim(Some(&t)).unwrap().as_ptr(), t.as_ptr());
}

// === Comparison ===

#[test]
fn compare_to_same_instance_is_zero() {
    let t = text();
    assert_eq!(ops::compare_to(Some(&t), Some(&t)), Ok(0));
}

#[test]
fn compare_to_equal_content_is_zero() {
    let a = text();
    let b = text();
    assert_eq!(ops::compare_to(Some(&a), Some(&b)), Ok(0));
}

#[test]
fn compare_to_first_difference_decides() {
    // TEXT has "amet" where TEXT_2 has "omet"; 'a' < 'o'
    let a = Text::from(TEXT);
    let b = Text::from(TEXT_2);
    assert_eq!(ops::compare_to(Some(&a), Some(&b)), Ok(-1));
    assert_eq!(ops::compare_to(Some(&b), Some(&a)), Ok(1));
}

#[test]
fn compare_to_prefix_is_smaller() {
    let a = Text::from("abc");
    let b = Text::from("abcd");
    assert_eq!(ops::compare_to(Some(&a), Some(&b)), Ok(-1));
    assert_eq!(ops::compare_to(Some(&b), Some(&a)), Ok(1));
}

#[test]
fn compare_to_is_antisymmetric() {
    let pairs = [("", "x"), ("abc", "abd"), ("same", "same"), ("Zz", "aA")];
    for (left, right) in pairs {
        let a = Text::from(left);
        let b = Text::from(right);
        let ab = ops::compare_to(Some(&a), Some(&b)).unwrap();
        let ba = ops::compare_to(Some(&b), Some(&a)).unwrap();
        assert_eq!(ab, -ba, "{left:?} vs {right:?}");
    }
}

#[test]
fn compare_part_identical_subranges() {
    let t = text();
    assert_eq!(ops::compare_part(Some(&t), 10, Some(&t), 10, 10), Ok(0));
}

#[test]
fn compare_part_differing_subranges() {
    let a = Text::from(TEXT);
    let b = Text::from(TEXT_2);
    // units 10..20 are identical across the two texts
    assert_eq!(ops::compare_part(Some(&a), 10, Some(&b), 10, 10), Ok(0));
    // units 20..35 include the amet/omet difference
    assert_eq!(ops::compare_part(Some(&a), 20, Some(&b), 20, 15), Ok(-1));
    assert_eq!(ops::compare_part(Some(&b), 20, Some(&a), 20, 15), Ok(1));
}

#[test]
fn compare_part_receiver_deficiency_breaks_the_tie() {
    let a = Text::from("abc");
    let b = Text::from("abcdef");
    assert_eq!(ops::compare_part(Some(&a), 0, Some(&b), 0, 6), Ok(-1));
    assert_eq!(ops::compare_part(Some(&b), 0, Some(&a), 0, 6), Ok(1));
}

#[test]
fn compare_part_equal_deficiency_keeps_minus_one() {
    let a = Text::from("xxab");
    let b = Text::from("ab");
    // both have exactly 2 units left; the receiver clamp stands
    assert_eq!(ops::compare_part(Some(&a), 2, Some(&b), 0, 5), Ok(-1));
}

#[test]
fn compare_part_mismatch_beats_deficiency() {
    let a = Text::from("az");
    let b = Text::from("abcdef");
    assert_eq!(ops::compare_part(Some(&a), 0, Some(&b), 0, 6), Ok(1));
}

#[test]
fn compare_part_start_past_end_is_a_range_error() {
    let t = text();
    assert_eq!(
        ops::compare_part(Some(&t), t.len() + 1, Some(&t), 0, 1),
        Err(Error::Range { param: "text_start" })
    );
    assert_eq!(
        ops::compare_part(Some(&t), 0, Some(&t), t.len() + 1, 1),
        Err(Error::Range { param: "other_start" })
    );
}

#[test]
fn compare_part_start_at_length_is_valid() {
    let t = text();
    // zero units remain on the receiver side; deficiency decides
    assert_eq!(ops::compare_part(Some(&t), t.len(), Some(&t), 0, 3), Ok(-1));
    assert_eq!(ops::compare_part(Some(&t), t.len(), Some(&t), t.len(), 0), Ok(0));
}

// === Scenarios on the reference text ===

#[test]
fn scenario_trim_reference_text() {
    let t = text();
    let trimmed = ops::trim(Some(&t)).unwrap();
    assert!(!trimmed.is_empty());
    assert_eq!(trimmed.as_bytes().first(), Some(&b'L'));
    assert_eq!(trimmed.as_bytes().last(), Some(&b'a'));
    assert_eq!(trimmed, TEXT.trim_matches(' '));
}

#[test]
fn scenario_split_ints() {
    let t = Text::from("1, 43, 11, 2");
    let d = Text::from(", ");
    let ints = ops::split_to_ints(Some(&t), Some(&d)).unwrap();
    assert_eq!(&ints[..], &[1, 43, 11, 2]);
}

#[test]
fn scenario_index_of_absent_word() {
    let t = text();
    let needle = Text::from("window");
    assert_eq!(ops::index_of(Some(&t), Some(&needle)), Ok(ops::NOT_FOUND));
}

#[test]
fn scenario_split_join_normalizes() {
    let t = Text::from("  Lorem  ipsum dolor  ");
    let d = Text::from(" ");
    let parts = ops::split_to_strings(Some(&t), Some(&d)).unwrap();
    let joined = parts
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(joined, "Lorem ipsum dolor");
}
