/// MIME types accepted for PDF uploads.
pub const ACCEPTED_PDF_TYPES: [&str; 3] = [
    "application/pdf",
    "application/x-pdf",
    "application/octet-stream",
];

/// Returns the `type/subtype` part of a Content-Type value, lowercased and
/// without parameters (e.g., `Application/PDF; name=a.pdf` -> `application/pdf`).
pub fn mime_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// Returns true when the declared content type of an upload is on the PDF
/// allow-list. A missing content type is never accepted.
///
/// Matching is on the MIME essence, not the raw header value:
/// `application/pdf; name=a.pdf` and `Application/PDF` are both accepted,
/// where a byte-exact comparison would refuse them.
pub fn is_accepted_pdf_upload(content_type: Option<&str>) -> bool {
    content_type
        .map(mime_essence)
        .is_some_and(|essence| ACCEPTED_PDF_TYPES.contains(&essence.as_str()))
}
