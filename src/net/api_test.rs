use super::*;

use futures::executor::block_on;

#[test]
fn script_endpoint_formats_expected_path() {
    assert_eq!(script_endpoint("abcdefghij"), "/api/scripts/abcdefghij");
}

#[test]
fn script_endpoint_encodes_id() {
    assert_eq!(script_endpoint("a/b"), "/api/scripts/a%2Fb");
}

#[test]
fn script_text_endpoint_appends_text() {
    assert_eq!(
        script_text_endpoint("12345-12345-12345-12345"),
        "/api/scripts/12345-12345-12345-12345/text"
    );
}

#[test]
fn markdown_endpoint_strips_leading_slash() {
    assert_eq!(markdown_endpoint("/examples/blink"), "/api/md/examples/blink");
    assert_eq!(markdown_endpoint("projects"), "/api/md/projects");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn native_build_reports_unavailable() {
    assert_eq!(block_on(CloudApi.script("abcdefghij")), Err(ApiError::Unavailable));
    assert_eq!(block_on(CloudApi.script_files("abcdefghij")), Err(ApiError::Unavailable));
    assert_eq!(block_on(CloudApi.markdown("projects")), Err(ApiError::Unavailable));
}
