// Page rendering
// One server-rendered page: submit form, five tabbed result sections and
// the search sidebar; all dynamic values are escaped

use axum::extract::State;
use axum::response::Html;
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::session::{SearchReply, Session};
use crate::models::video::{GeneratedText, OutputKind, VideoDigest, VideoMetadata};
use crate::utils::formatters;
use crate::web::AppState;

const TABS: [(&str, &str); 5] = [
    ("metadata", "📌 Metadata"),
    ("summary", "📰 Summary"),
    ("captions", "🗣 Captions"),
    ("article", "📝 Article"),
    ("video", "▶️ Video"),
];

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #222;
       background: linear-gradient(135deg, #e8f0fe, #c2e9fb); min-height: 100vh; }
.layout { display: grid; grid-template-columns: 1fr 320px; gap: 24px;
          max-width: 1100px; margin: 0 auto; padding: 24px; }
main, aside { background: #fff; border-radius: 10px; padding: 20px;
              box-shadow: 0 2px 10px rgba(0,0,0,0.08); align-self: start; }
h1 { font-size: 1.5rem; margin-top: 0; }
.submit-form { display: flex; gap: 8px; margin-bottom: 20px; }
.submit-form input { flex: 1; padding: 8px; border: 1px solid #ccc; border-radius: 6px; }
button { padding: 8px 14px; border: none; border-radius: 6px;
         background: #3367d6; color: #fff; cursor: pointer; }
button:hover { background: #274fae; }
.flash { background: #fdecea; color: #b3261e; padding: 10px; border-radius: 6px; }
.tab-bar { display: flex; gap: 6px; flex-wrap: wrap; margin-bottom: 12px; }
.tab-button { background: #eef1f6; color: #222; }
.tab-button.active { background: #3367d6; color: #fff; }
.tab-panel { display: none; }
.prose { white-space: pre-wrap; line-height: 1.5; }
.thumb { max-width: 100%; border-radius: 6px; margin-bottom: 12px; }
table.meta { border-collapse: collapse; width: 100%; }
table.meta td { padding: 6px 8px; border-bottom: 1px solid #eee; vertical-align: top; }
table.meta td:first-child { font-weight: 600; white-space: nowrap; }
details pre { background: #f6f8fa; padding: 10px; border-radius: 6px; overflow-x: auto; }
iframe { width: 100%; aspect-ratio: 16 / 9; border: 0; border-radius: 6px; }
aside h2 { margin-top: 0; font-size: 1.1rem; }
#search-input { width: 100%; box-sizing: border-box; padding: 8px;
                border: 1px solid #ccc; border-radius: 6px; }
.search-actions { display: flex; gap: 8px; margin: 10px 0; }
#search-results { font-size: 0.9rem; line-height: 1.5; white-space: pre-wrap; }
"#;

const SCRIPT: &str = r#"
function showTab(name) {
  document.querySelectorAll('.tab-panel').forEach(p => p.style.display = 'none');
  document.querySelectorAll('.tab-button').forEach(b => b.classList.remove('active'));
  document.getElementById('panel-' + name).style.display = 'block';
  document.getElementById('tab-' + name).classList.add('active');
}
if (document.getElementById('tab-metadata')) showTab('metadata');

function runSearch() {
  const input = document.getElementById('search-input');
  const results = document.getElementById('search-results');
  const query = input.value.trim();
  if (!query) { results.textContent = 'Please enter a search query'; return; }
  results.textContent = '';
  const source = new EventSource('/search/stream?q=' + encodeURIComponent(query));
  source.onmessage = (e) => {
    const line = document.createElement('div');
    line.textContent = e.data || ' ';
    results.appendChild(line);
  };
  source.addEventListener('done', () => source.close());
  source.onerror = () => { source.close(); results.textContent += 'Search failed'; };
}
"#;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_page(&session, None))
}

/// Render the full page from the current session, with an optional flash
/// message for the last action
pub fn render_page(session: &Session, flash: Option<&str>) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Akari - AI YouTube Video Digest</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"layout\">\n<main>\n");
    html.push_str("<h1>🎥 AI YouTube Video Digest</h1>\n");

    if let Some(message) = flash {
        html.push_str(&format!("<p class=\"flash\">❌ {}</p>\n", encode_text(message)));
    }

    html.push_str(
        "<form method=\"post\" action=\"/summarize\" class=\"submit-form\">\n\
         <input type=\"text\" name=\"video\" placeholder=\"🔗 YouTube URL or video ID\" required>\n\
         <button type=\"submit\">Summarize Video</button>\n</form>\n",
    );

    if let Some(digest) = session.digest() {
        html.push_str(&render_digest(digest));
    }

    html.push_str("</main>\n<aside>\n");
    html.push_str(&render_search(session.search()));
    html.push_str("</aside>\n</div>\n<script>");
    html.push_str(SCRIPT);
    html.push_str("</script>\n</body>\n</html>\n");

    html
}

fn render_digest(digest: &VideoDigest) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"tab-bar\">\n");
    for (name, label) in TABS {
        html.push_str(&format!(
            "<button type=\"button\" class=\"tab-button\" id=\"tab-{name}\" \
             onclick=\"showTab('{name}')\">{label}</button>\n"
        ));
    }
    html.push_str("</div>\n");

    html.push_str(&panel("metadata", &render_metadata(&digest.metadata)));
    html.push_str(&panel("summary", &render_output(digest.content.get(OutputKind::Summary))));
    html.push_str(&panel("captions", &render_output(digest.content.get(OutputKind::Captions))));
    html.push_str(&panel("article", &render_output(digest.content.get(OutputKind::Article))));
    html.push_str(&panel(
        "video",
        &format!(
            "<iframe src=\"{}\" allowfullscreen></iframe>",
            encode_double_quoted_attribute(&digest.reference.embed_url())
        ),
    ));

    html
}

fn panel(name: &str, body: &str) -> String {
    format!("<div class=\"tab-panel\" id=\"panel-{name}\">\n{body}</div>\n")
}

fn render_output(text: &GeneratedText) -> String {
    match text {
        GeneratedText::Ready(body) => format!("<div class=\"prose\">{}</div>\n", encode_text(body)),
        GeneratedText::Failed(reason) => {
            format!("<p class=\"flash\">❌ {}</p>\n", encode_text(reason))
        }
    }
}

fn render_metadata(metadata: &VideoMetadata) -> String {
    let mut html = String::new();

    if let Some(thumb) = &metadata.thumbnail {
        html.push_str(&format!(
            "<img class=\"thumb\" src=\"{}\" alt=\"Video thumbnail\">\n",
            encode_double_quoted_attribute(thumb)
        ));
    }

    html.push_str("<table class=\"meta\">\n");
    push_row(&mut html, "Title", metadata.title.as_deref());
    push_row(&mut html, "Channel", metadata.channel.as_deref());
    push_row(
        &mut html,
        "Duration",
        metadata
            .duration_seconds
            .map(formatters::format_duration)
            .as_deref(),
    );
    push_row(
        &mut html,
        "Views",
        metadata.view_count.map(formatters::format_number).as_deref(),
    );
    push_row(
        &mut html,
        "Published",
        metadata
            .published_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .as_deref(),
    );
    push_row(
        &mut html,
        "Description",
        metadata
            .description
            .as_deref()
            .map(|d| formatters::truncate(d, 500))
            .as_deref(),
    );
    html.push_str("</table>\n");

    if let Ok(json) = serde_json::to_string_pretty(metadata) {
        html.push_str(&format!(
            "<details><summary>Raw metadata</summary><pre>{}</pre></details>\n",
            encode_text(&json)
        ));
    }

    html
}

fn push_row(html: &mut String, label: &str, value: Option<&str>) {
    let value = match value {
        Some(v) if !v.is_empty() => encode_text(v).into_owned(),
        _ => "—".to_string(),
    };
    html.push_str(&format!("<tr><td>{}</td><td>{}</td></tr>\n", label, value));
}

fn render_search(last: Option<&SearchReply>) -> String {
    let mut html = String::new();

    html.push_str("<h2>🔍 Web Search</h2>\n");
    match last {
        Some(reply) => html.push_str(&format!(
            "<input type=\"text\" id=\"search-input\" placeholder=\"Ask a question\" value=\"{}\">\n",
            encode_double_quoted_attribute(&reply.query)
        )),
        None => html.push_str(
            "<input type=\"text\" id=\"search-input\" placeholder=\"Ask a question\">\n",
        ),
    }

    html.push_str(
        "<div class=\"search-actions\">\n\
         <button type=\"button\" onclick=\"runSearch()\">Search</button>\n\
         <form method=\"post\" action=\"/search/clear\"><button type=\"submit\">Clear</button></form>\n\
         </div>\n",
    );

    html.push_str("<div id=\"search-results\">");
    if let Some(reply) = last {
        for line in &reply.lines {
            html.push_str(&format!("<div>{}</div>", encode_text(line)));
        }
    }
    html.push_str("</div>\n");

    html
}
