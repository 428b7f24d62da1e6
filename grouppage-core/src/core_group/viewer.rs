//! The requester viewing a group page

use super::types::ViewerId;
use serde::{Deserialize, Serialize};

const ANONYMOUS_NAME: &str = "Anonymous";

/// Identity resolved per request by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: ViewerId,
    pub display_name: String,
    authenticated: bool,
}

impl Viewer {
    pub fn authenticated(id: ViewerId, display_name: impl Into<String>) -> Self {
        Viewer {
            id,
            display_name: display_name.into(),
            authenticated: true,
        }
    }

    pub fn anonymous() -> Self {
        Viewer {
            id: ViewerId::anonymous(),
            display_name: ANONYMOUS_NAME.to_string(),
            authenticated: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn is_anonymous(&self) -> bool {
        !self.authenticated
    }
}
