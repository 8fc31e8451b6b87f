use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: u32,
    pub author: String,
    pub content: String,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub tags: Vec<String>,
}

/// Static seed feed. The portal keeps no forum state server-side; new posts
/// live only in the client session that wrote them.
pub fn seed_posts() -> Vec<ForumPost> {
    vec![
        ForumPost {
            id: 1,
            author: "Jane Doe".into(),
            content: "Living with a traumatic brain injury has been challenging, but I have found \
                      that daily mindfulness exercises have really helped me manage my symptoms. \
                      Has anyone else tried this?"
                .into(),
            likes: 15,
            comments: 3,
            shares: 2,
            tags: vec!["TBI".into(), "Mindfulness".into(), "Coping Strategies".into()],
        },
        ForumPost {
            id: 2,
            author: "John Smith".into(),
            content: "I am struggling with memory issues after my stroke. Does anyone have tips \
                      for improving cognitive function or tools they have found helpful?"
                .into(),
            likes: 8,
            comments: 5,
            shares: 1,
            tags: vec!["Stroke".into(), "Memory".into(), "Cognitive Function".into()],
        },
        ForumPost {
            id: 3,
            author: "Emily Johnson".into(),
            content: "Just wanted to share a win - I was able to return to work part-time after \
                      my brain injury! It has been a long journey, but I am proud of how far I \
                      have come. Do not give up hope, everyone!"
                .into(),
            likes: 22,
            comments: 7,
            shares: 4,
            tags: vec!["Recovery".into(), "Work".into(), "Hope".into()],
        },
    ]
}

pub async fn forum_posts() -> Json<Vec<ForumPost>> {
    Json(seed_posts())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::{AppState, router};

    #[test]
    fn seed_feed_matches_the_portal_data() {
        let posts = seed_posts();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].author, "Jane Doe");
        assert_eq!(posts[2].likes, 22);
        assert_eq!(posts[1].tags, vec!["Stroke", "Memory", "Cognitive Function"]);
    }

    #[tokio::test]
    async fn feed_endpoint_serves_the_seed_posts() {
        let app = router(AppState::new("http://127.0.0.1:9".into()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/forum/posts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let posts: Vec<ForumPost> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].id, 1);
    }
}
