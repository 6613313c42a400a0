//! Best-effort JSON extraction from model output.
//!
//! Models wrap their JSON in prose and Markdown fences. This is a string
//! heuristic, not a parser: the result is not validated on either path.

/// Markdown code-fence marker that triggers slicing.
const CODE_FENCE: &str = "```";

/// Return the JSON object embedded in `content`.
///
/// When `content` contains a code fence, the slice from the first `{` to the
/// last `}` (inclusive) is returned. Without a fence, or when either brace is
/// missing or the last `}` does not come after the first `{`, `content` is
/// returned unchanged.
pub fn extract_json(content: &str) -> &str {
    if !content.contains(CODE_FENCE) {
        return content;
    }
    match (content.find('{'), content.rfind('}')) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => content,
    }
}
