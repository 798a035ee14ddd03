//! Flat-text rendering of a profile for the downstream analysis prompt.

use crate::types::ScrapedPost;

/// Render a profile header plus its post captions as one text block.
///
/// Pure and deterministic: identical inputs always produce a byte-identical
/// string. All inputs are treated as opaque strings already defaulted
/// upstream, so there are no error conditions.
#[must_use]
pub fn build_transcript(
    username: &str,
    full_name: &str,
    biography: &str,
    followers_count: &str,
    posts: &[ScrapedPost],
) -> String {
    let captions = posts
        .iter()
        .enumerate()
        .map(|(i, post)| format!("[Post {n}] {caption}", n = i + 1, caption = post.caption))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Profile: {full_name} (@{username})\n\
         Bio: {biography}\n\
         Followers: {followers_count}\n\
         \n\
         Recent Content (Captions):\n\
         {captions}\n"
    )
}
