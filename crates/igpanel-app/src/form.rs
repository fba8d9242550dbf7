//! Dashboard action form and request validation
//!
//! Required fields are trimmed and must be non-empty before anything is
//! sent. A failed check produces one warning and no request.

use igpanel_client::{ActionInputs, ActionKind, ActionRequest};

/// Form inputs, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Username,
    Url,
    Comment,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Username, FormField::Url, FormField::Comment];

    pub fn next(self) -> Self {
        match self {
            FormField::Username => FormField::Url,
            FormField::Url => FormField::Comment,
            FormField::Comment => FormField::Username,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Username => FormField::Comment,
            FormField::Url => FormField::Username,
            FormField::Comment => FormField::Url,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Username => "Username",
            FormField::Url => "Post URL",
            FormField::Comment => "Comment",
        }
    }
}

/// A required input was missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: FormField,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self.field {
            FormField::Username => "Enter a username",
            FormField::Url => "Enter a post URL",
            FormField::Comment => "Enter a comment",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

fn required(value: &str, field: FormField) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError { field })
    } else {
        Ok(trimmed.to_string())
    }
}

/// Build a request for `kind` from raw inputs
pub fn build_request(
    kind: ActionKind,
    username: &str,
    url: &str,
    comment: &str,
) -> Result<ActionRequest, ValidationError> {
    let request = match kind {
        ActionKind::Init => ActionRequest::Init,
        ActionKind::Follow => ActionRequest::Follow {
            username: required(username, FormField::Username)?,
        },
        ActionKind::Unfollow => ActionRequest::Unfollow {
            username: required(username, FormField::Username)?,
        },
        ActionKind::Like => ActionRequest::Like {
            url: required(url, FormField::Url)?,
        },
        ActionKind::Unlike => ActionRequest::Unlike {
            url: required(url, FormField::Url)?,
        },
        ActionKind::Save => ActionRequest::Save {
            url: required(url, FormField::Url)?,
        },
        ActionKind::Unsave => ActionRequest::Unsave {
            url: required(url, FormField::Url)?,
        },
        ActionKind::Comment => ActionRequest::Comment {
            url: required(url, FormField::Url)?,
            comment: required(comment, FormField::Comment)?,
        },
        ActionKind::CommentAi => ActionRequest::CommentAi {
            url: required(url, FormField::Url)?,
            comment: required(comment, FormField::Comment)?,
        },
    };
    Ok(request)
}

/// Text inputs on the dashboard
#[derive(Debug, Clone, Default)]
pub struct ActionForm {
    pub username: String,
    pub url: String,
    pub comment: String,
    pub focus: FormField,
}

impl ActionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Username => &self.username,
            FormField::Url => &self.url,
            FormField::Comment => &self.comment,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Username => &mut self.username,
            FormField::Url => &mut self.url,
            FormField::Comment => &mut self.comment,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn clear_focused(&mut self) {
        self.focused_mut().clear();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Validate the current inputs for `kind`
    ///
    /// On failure focus moves to the missing field.
    pub fn request(&mut self, kind: ActionKind) -> Result<ActionRequest, ValidationError> {
        build_request(kind, &self.username, &self.url, &self.comment).map_err(|err| {
            self.focus = err.field;
            err
        })
    }

    /// Inputs an action reads, for highlighting
    pub fn fields_for(kind: ActionKind) -> &'static [FormField] {
        match kind.inputs() {
            ActionInputs::None => &[],
            ActionInputs::Username => &[FormField::Username],
            ActionInputs::Url => &[FormField::Url],
            ActionInputs::UrlAndComment => &[FormField::Url, FormField::Comment],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_username_rejected() {
        let err = build_request(ActionKind::Follow, "   ", "", "").unwrap_err();
        assert_eq!(err.field, FormField::Username);
        assert_eq!(err.message(), "Enter a username");
    }

    #[test]
    fn test_values_are_trimmed() {
        let request = build_request(ActionKind::Unfollow, "  alice \t", "", "").unwrap();
        assert_eq!(
            request,
            ActionRequest::Unfollow {
                username: "alice".into()
            }
        );
    }

    #[test]
    fn test_comment_needs_url_then_comment() {
        let err = build_request(ActionKind::Comment, "", "", "").unwrap_err();
        assert_eq!(err.field, FormField::Url);
        let err = build_request(ActionKind::CommentAi, "", "https://x/p/1", " ").unwrap_err();
        assert_eq!(err.field, FormField::Comment);
    }

    #[test]
    fn test_url_actions() {
        for kind in [
            ActionKind::Like,
            ActionKind::Unlike,
            ActionKind::Save,
            ActionKind::Unsave,
        ] {
            assert!(build_request(kind, "ignored", "", "").is_err());
            let request = build_request(kind, "", "https://x/p/1", "").unwrap();
            assert_eq!(request.kind(), kind);
        }
    }

    #[test]
    fn test_init_needs_nothing() {
        assert_eq!(
            build_request(ActionKind::Init, "", "", "").unwrap(),
            ActionRequest::Init
        );
    }

    #[test]
    fn test_form_editing() {
        let mut form = ActionForm::new();
        for c in "bob".chars() {
            form.insert_char(c);
        }
        form.focus_next();
        form.insert_char('u');
        form.backspace();
        form.backspace();
        assert_eq!(form.username, "bob");
        assert_eq!(form.url, "");
        form.focus_prev();
        form.clear_focused();
        assert_eq!(form.username, "");
    }

    #[test]
    fn test_failed_request_focuses_missing_field() {
        let mut form = ActionForm::new();
        form.url = "https://x/p/1".into();
        assert!(form.request(ActionKind::Comment).is_err());
        assert_eq!(form.focus, FormField::Comment);
    }

    #[test]
    fn test_focus_cycles() {
        let mut field = FormField::Username;
        for _ in 0..3 {
            field = field.next();
        }
        assert_eq!(field, FormField::Username);
        assert_eq!(FormField::Username.prev(), FormField::Comment);
    }
}
