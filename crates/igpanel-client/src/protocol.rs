//! Backend endpoints and action request bodies

use serde_json::{json, Value};

/// HTTP endpoints exposed by the automation backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Logs,
    Status,
    Init,
    Follow,
    Unfollow,
    Like,
    Unlike,
    Comment,
    CommentAi,
    Save,
    Unsave,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Logs => "/api/logs",
            Endpoint::Status => "/api/status",
            Endpoint::Init => "/api/init",
            Endpoint::Follow => "/api/follow",
            Endpoint::Unfollow => "/api/unfollow",
            Endpoint::Like => "/api/like",
            Endpoint::Unlike => "/api/unlike",
            Endpoint::Comment => "/api/comment",
            Endpoint::CommentAi => "/api/comment-ai",
            Endpoint::Save => "/api/save",
            Endpoint::Unsave => "/api/unsave",
        }
    }
}

/// The operator actions, independent of their arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Init,
    Follow,
    Unfollow,
    Like,
    Unlike,
    Comment,
    CommentAi,
    Save,
    Unsave,
}

/// Which form inputs an action needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionInputs {
    None,
    Username,
    Url,
    UrlAndComment,
}

impl ActionKind {
    /// The account actions offered on the dashboard, in key binding order
    pub const DASHBOARD: [ActionKind; 8] = [
        ActionKind::Follow,
        ActionKind::Unfollow,
        ActionKind::Like,
        ActionKind::Unlike,
        ActionKind::Comment,
        ActionKind::CommentAi,
        ActionKind::Save,
        ActionKind::Unsave,
    ];

    pub fn endpoint(&self) -> Endpoint {
        match self {
            ActionKind::Init => Endpoint::Init,
            ActionKind::Follow => Endpoint::Follow,
            ActionKind::Unfollow => Endpoint::Unfollow,
            ActionKind::Like => Endpoint::Like,
            ActionKind::Unlike => Endpoint::Unlike,
            ActionKind::Comment => Endpoint::Comment,
            ActionKind::CommentAi => Endpoint::CommentAi,
            ActionKind::Save => Endpoint::Save,
            ActionKind::Unsave => Endpoint::Unsave,
        }
    }

    pub fn inputs(&self) -> ActionInputs {
        match self {
            ActionKind::Init => ActionInputs::None,
            ActionKind::Follow | ActionKind::Unfollow => ActionInputs::Username,
            ActionKind::Like | ActionKind::Unlike | ActionKind::Save | ActionKind::Unsave => {
                ActionInputs::Url
            }
            ActionKind::Comment | ActionKind::CommentAi => ActionInputs::UrlAndComment,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Init => "Initialize",
            ActionKind::Follow => "Follow",
            ActionKind::Unfollow => "Unfollow",
            ActionKind::Like => "Like",
            ActionKind::Unlike => "Unlike",
            ActionKind::Comment => "Comment",
            ActionKind::CommentAi => "AI comment",
            ActionKind::Save => "Save",
            ActionKind::Unsave => "Unsave",
        }
    }

    /// Command word used by the headless runner
    pub fn command(&self) -> &'static str {
        match self {
            ActionKind::Init => "init",
            ActionKind::Follow => "follow",
            ActionKind::Unfollow => "unfollow",
            ActionKind::Like => "like",
            ActionKind::Unlike => "unlike",
            ActionKind::Comment => "comment",
            ActionKind::CommentAi => "comment-ai",
            ActionKind::Save => "save",
            ActionKind::Unsave => "unsave",
        }
    }

    pub fn from_command(word: &str) -> Option<Self> {
        [ActionKind::Init]
            .into_iter()
            .chain(Self::DASHBOARD)
            .find(|kind| kind.command() == word)
    }
}

/// A validated action ready to be posted
///
/// Field values are already trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    Init,
    Follow { username: String },
    Unfollow { username: String },
    Like { url: String },
    Unlike { url: String },
    Comment { url: String, comment: String },
    CommentAi { url: String, comment: String },
    Save { url: String },
    Unsave { url: String },
}

impl ActionRequest {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionRequest::Init => ActionKind::Init,
            ActionRequest::Follow { .. } => ActionKind::Follow,
            ActionRequest::Unfollow { .. } => ActionKind::Unfollow,
            ActionRequest::Like { .. } => ActionKind::Like,
            ActionRequest::Unlike { .. } => ActionKind::Unlike,
            ActionRequest::Comment { .. } => ActionKind::Comment,
            ActionRequest::CommentAi { .. } => ActionKind::CommentAi,
            ActionRequest::Save { .. } => ActionKind::Save,
            ActionRequest::Unsave { .. } => ActionKind::Unsave,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.kind().endpoint()
    }

    /// JSON body for the POST
    pub fn body(&self) -> Value {
        match self {
            ActionRequest::Init => json!({}),
            ActionRequest::Follow { username } | ActionRequest::Unfollow { username } => {
                json!({ "username": username })
            }
            ActionRequest::Like { url }
            | ActionRequest::Unlike { url }
            | ActionRequest::Save { url }
            | ActionRequest::Unsave { url } => json!({ "url": url }),
            ActionRequest::Comment { url, comment } | ActionRequest::CommentAi { url, comment } => {
                json!({ "url": url, "comment": comment })
            }
        }
    }
}
