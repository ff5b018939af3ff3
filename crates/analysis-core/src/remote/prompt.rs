//! Prompt construction for the remote analysis service

use shared_types::Document;

pub const SYSTEM_PROMPT: &str = "You are a legal document analysis expert. Analyze the provided \
document and extract key information, red flags, and create a consent checklist. Respond with \
valid JSON only.";

pub const TRUNCATION_MARKER: &str = "...[truncated]";

const OUTPUT_SCHEMA: &str = r#"{
  "summary": [
    { "number": 1, "content": "Two or three short points from section 1" }
  ],
  "keyPoints": [
    "The 5-10 most important points the reader should understand"
  ],
  "redFlags": [
    {
      "term": "specific legal term or clause",
      "description": "why this is important or risky",
      "severity": "high | medium | low",
      "context": "relevant excerpt from the document"
    }
  ],
  "consentChecklist": [
    { "text": "I understand: <key point in plain language>", "isRedFlag": false },
    { "text": "I acknowledge: <red flag in plain language>", "isRedFlag": true }
  ]
}"#;

const GUIDANCE: &str = "Guidelines:
- Cover every section of the document, at most 3 short points per section
- Keep each point to roughly 8-10 words
- Look for financial obligations (rent, fees, penalties), deadlines and dates, \
automatic renewals or subscriptions, liability clauses, data handling, \
termination and cancellation terms, dispute resolution, and anything else \
that could work against the reader
- Use plain language a non-lawyer can follow";

/// First `max_chars` characters of `text`, and whether anything was cut
pub fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => (&text[..end], true),
        None => (text, false),
    }
}

/// User message for one document
pub fn build_prompt(document: &Document, max_text_length: usize) -> String {
    let (text, truncated) = truncate_chars(document.text(), max_text_length);
    let marker = if truncated { TRUNCATION_MARKER } else { "" };

    format!(
        "Analyze this {} document and return the analysis as JSON.\n\n\
         Document Text:\n{} {}\n\n\
         Use exactly this JSON format:\n{}\n\n{}",
        document.document_type(),
        text,
        marker,
        OUTPUT_SCHEMA,
        GUIDANCE
    )
}
