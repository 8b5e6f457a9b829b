use drivetime_core::scheduling::timefmt::{format_hhmm, parse_hhmm, TimeParseError};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("00:00", 0)]
#[case("09:00", 540)]
#[case("09:05", 545)]
#[case("12:30", 750)]
#[case("17:30", 1050)]
#[case("23:59", 1439)]
fn parses_strict_zero_padded_times(#[case] input: &str, #[case] expected: u16) {
    assert_eq!(parse_hhmm(input), Ok(expected));
}

#[rstest]
// not zero-padded
#[case("9:00")]
// hour out of range
#[case("24:00")]
// minute out of range
#[case("09:60")]
// wrong separator
#[case("09-00")]
// surrounding noise
#[case(" 09:00")]
#[case("09:00 ")]
#[case("09:00x")]
// wrong shape entirely
#[case("")]
#[case("0900")]
#[case("hh:mm")]
fn rejects_anything_not_strict_hhmm(#[case] input: &str) {
    assert_eq!(parse_hhmm(input), Err(TimeParseError(input.to_string())));
}

#[rstest]
#[case(0, "00:00")]
#[case(540, "09:00")]
#[case(545, "09:05")]
#[case(1050, "17:30")]
#[case(1439, "23:59")]
fn formats_zero_padded(#[case] minutes: u16, #[case] expected: &str) {
    assert_eq!(format_hhmm(minutes), expected);
}

#[test]
fn parse_error_names_the_offending_input() {
    let err = parse_hhmm("25:99").unwrap_err();
    assert!(err.to_string().contains("25:99"));
}
