use super::*;
use crate::types::LookupResult;

fn response_with(urls: &[Option<&str>]) -> LookupResponse {
    LookupResponse {
        results: Some(
            urls.iter()
                .map(|url| LookupResult {
                    track_view_url: url.map(str::to_owned),
                })
                .collect(),
        ),
    }
}

// -----------------------------------------------------------------------
// strip_query
// -----------------------------------------------------------------------

#[test]
fn strip_query_removes_tracking_suffix() {
    assert_eq!(
        strip_query("https://apps.apple.com/app/id123?mt=8"),
        "https://apps.apple.com/app/id123"
    );
}

#[test]
fn strip_query_cuts_at_first_question_mark() {
    assert_eq!(
        strip_query("https://apps.apple.com/app/id123?uo=4?mt=8"),
        "https://apps.apple.com/app/id123"
    );
}

#[test]
fn strip_query_leaves_plain_url_unchanged() {
    assert_eq!(
        strip_query("https://apps.apple.com/app/id123"),
        "https://apps.apple.com/app/id123"
    );
}

#[test]
fn strip_query_leading_question_mark_yields_empty() {
    assert_eq!(strip_query("?x=1"), "");
}

#[test]
fn strip_query_trailing_question_mark_is_dropped() {
    assert_eq!(strip_query("https://apps.apple.com/app/id1?"), "https://apps.apple.com/app/id1");
}

// -----------------------------------------------------------------------
// extract_store_url
// -----------------------------------------------------------------------

#[test]
fn extract_takes_first_result_and_strips_query() {
    let response = response_with(&[
        Some("https://apps.apple.com/app/id123?mt=8"),
        Some("https://apps.apple.com/app/id999"),
    ]);
    assert_eq!(
        extract_store_url(response).unwrap(),
        "https://apps.apple.com/app/id123"
    );
}

#[test]
fn extract_does_not_fall_through_to_later_results() {
    let response = response_with(&[None, Some("https://apps.apple.com/app/id999")]);
    assert!(matches!(
        extract_store_url(response),
        Err(LookupError::NotFound)
    ));
}

#[test]
fn extract_empty_results_is_not_found() {
    assert!(matches!(
        extract_store_url(response_with(&[])),
        Err(LookupError::NotFound)
    ));
}

#[test]
fn extract_absent_results_is_not_found() {
    assert!(matches!(
        extract_store_url(LookupResponse::default()),
        Err(LookupError::NotFound)
    ));
}

#[test]
fn extract_empty_url_is_not_found() {
    assert!(matches!(
        extract_store_url(response_with(&[Some("")])),
        Err(LookupError::NotFound)
    ));
}

#[test]
fn extract_query_only_url_succeeds_with_empty_string() {
    let url = extract_store_url(response_with(&[Some("?x=1")])).unwrap();
    assert_eq!(url, "");
}

// -----------------------------------------------------------------------
// decode_store_url
// -----------------------------------------------------------------------

#[test]
fn decode_missing_field_is_not_found() {
    assert!(matches!(
        decode_store_url(br#"{"results":[{}]}"#),
        Err(LookupError::NotFound)
    ));
}

#[test]
fn decode_empty_object_is_not_found() {
    assert!(matches!(
        decode_store_url(b"{}"),
        Err(LookupError::NotFound)
    ));
}

#[test]
fn decode_malformed_json_keeps_parser_error() {
    let err = decode_store_url(b"{\"results\": [").unwrap_err();
    match err {
        LookupError::Decode(source) => assert!(source.is_eof(), "unexpected error: {source}"),
        other => panic!("expected Decode, got: {other:?}"),
    }
}

#[test]
fn decode_wrong_shape_is_decode_error() {
    assert!(matches!(
        decode_store_url(br#"{"results": "nope"}"#),
        Err(LookupError::Decode(_))
    ));
}

#[test]
fn decode_error_display_is_parser_message() {
    let source = serde_json::from_slice::<LookupResponse>(b"not json").unwrap_err();
    let err = decode_store_url(b"not json").unwrap_err();
    assert_eq!(err.to_string(), source.to_string());
}
