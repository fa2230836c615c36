// Instruction templates for the generation calls
// One template per output kind lives here so the prompts can't drift apart
// at the call sites

use chrono::Utc;

use crate::models::video::OutputKind;

/// Shared preamble for all three video outputs
const ANALYST_PREAMBLE: &str = "\
You are an expert YouTube content analyst with a keen eye for detail.
You are given a video's URL and its caption text (or description when
captions are unavailable). Work only from the provided material and answer
in Markdown.";

const SUMMARY_TASK: &str = "\
Summarize this video. Open with a one-paragraph overview, then list the
key points as a bulleted list. Keep it under 300 words.";

const CAPTIONS_TASK: &str = "\
Format the captions of this video. Reorganize the raw caption text into
readable, well-punctuated paragraphs with section headings where topics
change. Do not alter the meaning or drop content.";

const ARTICLE_TASK: &str = "\
Create an article from this video. Write a standalone piece with a
headline, an introduction, themed sections and a closing takeaway, so a
reader who never watches the video learns the same material.";

/// Instructions for the web-search assistant
const SEARCHER_INSTRUCTIONS: &str = "\
You are a web research assistant. Search the web for the user's question
and report what you find as a ranked list, most relevant first. For every
finding: start the line with a fitting emoji, state the finding in one or
two sentences, and name the source with a link. Finish with a one-line
bottom line.";

fn task(kind: OutputKind) -> &'static str {
    match kind {
        OutputKind::Summary => SUMMARY_TASK,
        OutputKind::Captions => CAPTIONS_TASK,
        OutputKind::Article => ARTICLE_TASK,
    }
}

/// Build the full prompt for one video output
pub fn build_prompt(kind: OutputKind, watch_url: &str, content: &str) -> String {
    format!(
        "{}\n\n{}\n\nVideo: {}\n\nRaw content:\n{}",
        ANALYST_PREAMBLE,
        task(kind),
        watch_url,
        content
    )
}

/// Build the full prompt for one search query
pub fn build_search_prompt(query: &str) -> String {
    format!(
        "{}\nToday's date is {}.\n\nQuestion: {}",
        SEARCHER_INSTRUCTIONS,
        Utc::now().format("%Y-%m-%d"),
        query
    )
}
