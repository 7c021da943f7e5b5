#[cfg(feature = "test-mode")]
use std::env;

/// Reads the response body as text.
///
/// Under `test-mode` with `MESSARI_RECORD=1` the body is also written to the fixture
/// directory, keyed on the final request path and query so that pages and field
/// selections of one endpoint land in separate files.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, reqwest::Error> {
    #[cfg(feature = "test-mode")]
    let name = crate::core::fixtures::fixture_name(resp.url().path(), resp.url().query());

    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("MESSARI_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(&name, &text)
        {
            eprintln!("MESSARI_RECORD: failed to write fixture {name}: {e}");
        }
    }

    Ok(text)
}
