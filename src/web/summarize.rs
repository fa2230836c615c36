// Summarize action
// Extracts the video reference, assembles the digest and re-renders the
// page; failures come back as flash messages, never error pages

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;
use tracing::{error, info};

use crate::features::extractor;
use crate::web::{page, AppState};

#[derive(Debug, Deserialize)]
pub struct SummarizeForm {
    pub video: String,
}

pub async fn summarize(State(state): State<AppState>, Form(form): Form<SummarizeForm>) -> Html<String> {
    let Some(reference) = extractor::extract(&form.video) else {
        let session = state.session.lock().await;
        return Html(page::render_page(
            &session,
            Some("Invalid YouTube URL or video ID"),
        ));
    };

    info!("Assembling digest for {}", reference.id);

    match state.assembler.assemble(reference).await {
        Ok(digest) => {
            let failed = digest.content.failed_kinds();
            if !failed.is_empty() {
                error!("Generation failed for: {}", failed.join(", "));
            }

            let mut session = state.session.lock().await;
            session.replace_digest(digest);
            Html(page::render_page(&session, None))
        }
        Err(e) => {
            error!("Assembly failed: {}", e);
            let session = state.session.lock().await;
            Html(page::render_page(&session, Some(&e.to_string())))
        }
    }
}
