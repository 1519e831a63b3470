use super::*;

use std::collections::HashMap;

use futures::executor::block_on;

use crate::net::types::MAIN_FILE;

struct FakeDocs(HashMap<&'static str, &'static str>);

#[async_trait(?Send)]
impl MarkdownSource for FakeDocs {
    async fn markdown(&self, path: &str) -> Result<String, ApiError> {
        self.0
            .get(path)
            .map(|md| (*md).to_owned())
            .ok_or_else(|| ApiError::Status { status: 404, url: format!("/api/md/{path}") })
    }
}

fn service() -> GalleryService {
    let docs = HashMap::from([
        ("projects", "## Basics\n\n```codecard\n[{ \"name\": \"Heart\", \"url\": \"/projects/heart\" }]\n```\n"),
        ("/examples/blink", "# Blink\n\n```blocks\nbasic.showIcon(IconNames.Heart)\n```\n"),
        ("/examples/prose", "# Prose only\n\nNo code here.\n"),
    ]);
    GalleryService::new(Arc::new(FakeDocs(docs)))
}

#[test]
fn galleries_parse_fetched_document() {
    let galleries = block_on(service().galleries("projects")).unwrap();
    assert_eq!(galleries.len(), 1);
    assert_eq!(galleries[0].name, "Basics");
    assert_eq!(galleries[0].cards[0].url, "/projects/heart");
}

#[test]
fn galleries_propagate_fetch_errors() {
    assert!(matches!(block_on(service().galleries("missing")), Err(ApiError::Status { status: 404, .. })));
}

#[test]
fn load_example_returns_project_contents() {
    let options = block_on(service().load_example("blink", "/examples/blink")).unwrap().unwrap();
    assert_eq!(options.name, "blink");
    assert_eq!(options.files[MAIN_FILE], "basic.showIcon(IconNames.Heart)");
}

#[test]
fn load_example_without_code_is_none() {
    assert_eq!(block_on(service().load_example("prose", "/examples/prose")), Ok(None));
}
