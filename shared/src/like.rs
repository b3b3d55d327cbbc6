//! "Like post" request and reply.
//!
//! Where the CSRF token comes from (a cookie, in the browser) is the caller's
//! business; this module only attaches whatever token it is handed.

use serde::Deserialize;

use crate::submission::{DEFAULT_FAILURE_MESSAGE, REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE};

/// Header carrying the CSRF token.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Anti-forgery token echoed back to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Wrap a token. Blank tokens are treated as absent.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return None;
        }
        Some(Self(token))
    }

    /// Raw token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `POST {prefix}/{post_id}/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeRequest {
    url: String,
    token: Option<CsrfToken>,
}

impl LikeRequest {
    /// Build the request for `post_id` under the endpoint `prefix`.
    pub fn new(prefix: &str, post_id: &str, token: Option<CsrfToken>) -> Self {
        let url = format!(
            "{}/{}/",
            prefix.trim_end_matches('/'),
            urlencoding::encode(post_id.trim())
        );
        Self {
            url,
            token,
        }
    }

    /// Endpoint path.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Headers to send. The CSRF header is left out when no token is known.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE.to_string())];
        if let Some(token) = &self.token {
            headers.push((CSRF_HEADER, token.as_str().to_string()));
        }
        headers
    }
}

fn assume_success() -> bool {
    true
}

/// Reply of the like endpoint. Older endpoints answer `{liked, count}`
/// without `success`; that shape is read as a success.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LikeResponse {
    /// Whether the toggle went through.
    #[serde(default = "assume_success")]
    pub success: bool,
    /// Whether the reader now likes the post.
    #[serde(default)]
    pub liked: bool,
    /// Authoritative like total.
    #[serde(default, alias = "count")]
    pub likes_count: Option<u64>,
    /// Error text for failures.
    #[serde(default)]
    pub message: Option<String>,
}

/// New state of a like button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    /// Liked by the reader.
    pub liked: bool,
    /// Count to display, if the server sent one.
    pub likes_count: Option<u64>,
}

impl LikeState {
    /// Font Awesome style prefix for the heart: solid when liked.
    pub fn icon_style(self) -> &'static str {
        if self.liked {
            "fas"
        } else {
            "far"
        }
    }
}

/// What to do with the button after a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeOutcome {
    /// Update the button to this state.
    Updated(LikeState),
    /// Leave the button alone and show this error.
    Rejected(String),
}

impl LikeResponse {
    /// Reduce to a [`LikeOutcome`].
    pub fn outcome(&self) -> LikeOutcome {
        if !self.success {
            let message = self
                .message
                .as_deref()
                .filter(|message| !message.is_empty())
                .unwrap_or(DEFAULT_FAILURE_MESSAGE);
            return LikeOutcome::Rejected(message.to_string());
        }
        LikeOutcome::Updated(LikeState {
            liked: self.liked,
            likes_count: self.likes_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response(value: serde_json::Value) -> LikeResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn url_is_built_under_the_prefix() {
        assert_eq!(LikeRequest::new("/like-post/", "42", None).url(), "/like-post/42/");
        assert_eq!(
            LikeRequest::new("/like-post", "hello world", None).url(),
            "/like-post/hello%20world/"
        );
    }

    #[test]
    fn token_is_attached_when_present() {
        let request = LikeRequest::new("/like-post", "1", CsrfToken::new("abc123"));
        assert_eq!(
            request.headers(),
            vec![
                ("X-Requested-With", "XMLHttpRequest".to_string()),
                ("X-CSRFToken", "abc123".to_string()),
            ]
        );
        assert_eq!(LikeRequest::new("/like-post", "1", CsrfToken::new("  ")).headers().len(), 1);
    }

    #[test]
    fn count_comes_straight_from_the_server() {
        let outcome = response(json!({ "success": true, "liked": true, "likes_count": 17 })).outcome();
        assert_eq!(
            outcome,
            LikeOutcome::Updated(LikeState {
                liked: true,
                likes_count: Some(17),
            })
        );
    }

    #[test]
    fn legacy_shape_is_accepted() {
        let outcome = response(json!({ "liked": false, "count": 3 })).outcome();
        let LikeOutcome::Updated(state) = outcome else {
            panic!("expected update");
        };
        assert_eq!(state.likes_count, Some(3));
        assert_eq!(state.icon_style(), "far");
    }

    #[test]
    fn failure_surfaces_message() {
        let outcome = response(json!({ "success": false, "message": "Log in first." })).outcome();
        assert_eq!(outcome, LikeOutcome::Rejected("Log in first.".into()));

        let outcome = response(json!({ "success": false })).outcome();
        assert_eq!(outcome, LikeOutcome::Rejected(DEFAULT_FAILURE_MESSAGE.into()));
    }
}
