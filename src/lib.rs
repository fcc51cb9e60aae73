//! pagesift: scrape JavaScript-heavy pages into chunked plain text
//!
//! Fetches rendered HTML through a remote CAPTCHA-solving browser, then
//! reduces it for size-limited consumers such as LLM prompts:
//! body extraction -> text cleaning -> fixed-size chunking.
//!
//! The reduction steps are pure functions and usable on their own; the
//! fetch step is the only network call.

pub mod browser;
pub mod chunk;
pub mod extract;

pub use browser::{fetch_page, FetchedPage, SessionConfig, SessionError};
pub use chunk::{chunk_text, DEFAULT_MAX_LEN};
pub use extract::{clean_text, extract_body};

use tracing::debug;

/// Run the whole pipeline against one URL: fetch the rendered page,
/// reduce it to clean text, and slice into chunks of at most `max_len`
/// characters.
///
/// A fetch failure aborts before any reduction runs. A page without
/// body content yields an empty chunk sequence.
pub async fn scrape_chunks(
    config: &SessionConfig,
    url: &str,
    max_len: usize,
) -> Result<Vec<String>, SessionError> {
    let page = browser::fetch_page(config, url).await?;
    debug!(
        html_len = page.html.len(),
        captcha_status = %page.captcha_status,
        "page fetched"
    );

    let body = extract::extract_body(&page.html).unwrap_or_default();
    let text = extract::clean_text(&body);
    debug!(text_len = text.len(), "content reduced");

    Ok(chunk::chunk_text(&text, max_len))
}
