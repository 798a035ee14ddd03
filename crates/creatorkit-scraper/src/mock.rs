//! Synthetic profile used when every live source fails.

use crate::types::{ScrapedPost, ScrapedProfile};

/// Build the fixed demo profile for a username.
///
/// Pure and deterministic given `username`, no I/O. The orchestrator returns
/// this unmodified when the whole fallback chain misses; it does not mark the
/// result in any way. Callers that need to label mock data compare the
/// profile they received against `mock_profile(username)`.
#[must_use]
pub fn mock_profile(username: &str) -> ScrapedProfile {
    let posts = vec![
        post(
            "Building the future of AI. Innovation never sleeps. #Tech #AI",
            "1.2k",
            "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=500&auto=format&fit=crop&q=60",
        ),
        post(
            "Behind the scenes at our new office. Minimalism is key.",
            "950",
            "https://images.unsplash.com/photo-1497366216548-37526070297c?w=500&auto=format&fit=crop&q=60",
        ),
        post(
            "Just launched our new product! Check the link in bio.",
            "2.1k",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=500&auto=format&fit=crop&q=60",
        ),
        post(
            "Coffee and code. The perfect Sunday morning.",
            "800",
            "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=500&auto=format&fit=crop&q=60",
        ),
        post(
            "Speaking at the global tech summit next week! Cannot wait.",
            "1.5k",
            "https://images.unsplash.com/photo-1475721027767-p753cce59d44?w=500&auto=format&fit=crop&q=60",
        ),
        post(
            "Exploring new frontiers in generative art. Does this look real?",
            "3.2k",
            "https://images.unsplash.com/photo-1549490349-8643362247b5?w=500&auto=format&fit=crop&q=60",
        ),
    ];

    ScrapedProfile::new(
        username,
        format!("{username} (Demo)"),
        "Creative Technologist • Building next-gen AI tools • Public Speaker",
        "15.2k",
        posts,
    )
}

fn post(caption: &str, likes: &str, image_url: &str) -> ScrapedPost {
    ScrapedPost {
        caption: caption.to_string(),
        likes: likes.to_string(),
        image_url: image_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::mock_profile;

    #[test]
    fn is_deterministic_per_username() {
        assert_eq!(mock_profile("someuser"), mock_profile("someuser"));
    }

    #[test]
    fn has_six_posts_and_fixed_fixture_fields() {
        let profile = mock_profile("someuser");
        assert_eq!(profile.posts.len(), 6);
        assert_eq!(profile.username, "someuser");
        assert_eq!(profile.full_name, "someuser (Demo)");
        assert_eq!(profile.followers_count, "15.2k");
        assert!(profile
            .posts
            .iter()
            .all(|p| p.image_url.starts_with("https://")));
    }

    #[test]
    fn different_usernames_differ_only_in_identity_fields() {
        let a = mock_profile("alpha");
        let b = mock_profile("beta");
        assert_ne!(a, b);
        assert_eq!(a.posts, b.posts);
        assert_eq!(a.biography, b.biography);
    }
}
