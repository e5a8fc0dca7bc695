use pkg_constants::network::UNKNOWN_ERROR_MESSAGE;
use pkg_types::error::ApiError;

/// Coarse category of a classified response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Unauthorized,
    NotFound,
    ClientError,
    ServerError,
}

impl OutcomeKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => OutcomeKind::Unauthorized,
            404 => OutcomeKind::NotFound,
            s if s >= 500 => OutcomeKind::ServerError,
            s if s >= 300 => OutcomeKind::ClientError,
            _ => OutcomeKind::Success,
        }
    }
}

/// Result of classifying one API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 2xx: the body is handed to the caller untouched.
    Success { body: Vec<u8> },
    /// Anything else, with the message to show the user.
    Failure {
        status: u16,
        kind: OutcomeKind,
        message: String,
    },
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Success { .. } => OutcomeKind::Success,
            Outcome::Failure { kind, .. } => *kind,
        }
    }

    /// User-facing failure message; empty for success.
    pub fn message(&self) -> &str {
        match self {
            Outcome::Success { .. } => "",
            Outcome::Failure { message, .. } => message,
        }
    }
}

/// Map a status code and body to an `Outcome`.
///
/// - `>= 500`: fixed message, body ignored.
/// - `>= 300`: message is the body's `error` field, or empty.
/// - otherwise success, body passed through.
pub fn classify(status: u16, body: Vec<u8>) -> Outcome {
    let kind = OutcomeKind::from_status(status);
    match kind {
        OutcomeKind::Success => Outcome::Success { body },
        OutcomeKind::ServerError => Outcome::Failure {
            status,
            kind,
            message: UNKNOWN_ERROR_MESSAGE.to_string(),
        },
        _ => {
            let message = std::str::from_utf8(&body)
                .map(|text| ApiError::parse(text).error)
                .unwrap_or_default();
            Outcome::Failure {
                status,
                kind,
                message,
            }
        }
    }
}
