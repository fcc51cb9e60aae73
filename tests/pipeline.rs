//! End-to-end tests for the offline reduction pipeline

use pagesift::{chunk_text, clean_text, extract_body, DEFAULT_MAX_LEN};

#[test]
fn test_markup_to_chunks() {
    let markup =
        "<html><body><script>x()</script><p> Hi there </p><p></p><p>Bye</p></body></html>";

    let body = extract_body(markup).expect("body present");
    assert_eq!(
        body,
        "<body><script>x()</script><p> Hi there </p><p></p><p>Bye</p></body>"
    );

    let text = clean_text(&body);
    assert_eq!(text, "Hi there\nBye");

    let chunks = chunk_text(&text, 5);
    assert_eq!(chunks, vec!["Hi th", "ere\nB", "ye"]);
    assert_eq!(chunks.concat(), text);
}

#[test]
fn test_bodyless_document_reduces_to_nothing() {
    let body = extract_body("<html><head><title>t</title></head></html>").unwrap_or_default();
    let text = clean_text(&body);
    assert!(text.is_empty());
    assert!(chunk_text(&text, DEFAULT_MAX_LEN).is_empty());
}

#[test]
fn test_realistic_page() {
    let markup = r#"<html>
<head>
  <title>Docs</title>
  <style>body { margin: 0; }</style>
</head>
<body>
  <nav><a href="/">Home</a></nav>
  <main>
    <h1>Getting Started</h1>
    <p>
      Install the package and
      run the setup script.
    </p>
    <script type="text/javascript">trackPageView();</script>
  </main>
</body>
</html>"#;

    let body = extract_body(markup).expect("body present");
    let text = clean_text(&body);

    assert!(!text.contains("trackPageView"));
    assert!(!text.contains("margin"));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Home",
            "Getting Started",
            "Install the package and",
            "run the setup script."
        ]
    );
    assert!(lines.iter().all(|l| !l.trim().is_empty()));

    let chunks = chunk_text(&text, 16);
    assert_eq!(chunks.concat(), text);
    assert!(chunks.iter().all(|c| c.chars().count() <= 16));
}
