use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, Debug, Clone)]
pub struct SendEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: Option<String>,
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Vec<String>>,
}

impl Default for SendEmail {
    fn default() -> Self {
        Self {
            from: "noreply@example.com".to_string(),
            to: vec![],
            subject: "".to_string(),
            html: None,
            text: None,
            reply_to: None,
        }
    }
}

/// Notifications the server sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailTemplate {
    /// To the system admin: someone wants to administer a club.
    AdminRequest(RequestMailData),
    /// To the club admin: someone wants to join their club.
    MemberRequest(RequestMailData),
    /// To the requester.
    ApprovalNotification(RequestMailData),
    /// To the requester.
    RejectionNotification {
        data: RequestMailData,
        reason: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMailData {
    pub request_id: Uuid,
    pub username: String,
    pub email: String,
    pub club_code: String,
    /// Human label of what was asked for, e.g. "club admin".
    pub requested: String,
}

impl From<&entity::registration_request::Model> for RequestMailData {
    fn from(req: &entity::registration_request::Model) -> Self {
        use entity::status::RequestType;

        Self {
            request_id: req.id,
            username: req.username.clone(),
            email: req.email.clone(),
            club_code: req.club_code.clone(),
            requested: match req.request_type {
                RequestType::Admin => "club admin".to_string(),
                RequestType::Member => "club member".to_string(),
            },
        }
    }
}
