//! Status code to outcome mapping for every endpoint the CLI calls.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    About,
    AccountMe,
    CreateLink,
    UpdateLink,
    DeleteLinks,
}

impl Endpoint {
    /// Verb phrase used in the generic failure message.
    fn action(self) -> &'static str {
        match self {
            Endpoint::About => "fetch instance info",
            Endpoint::AccountMe => "fetch account",
            Endpoint::CreateLink => "create link",
            Endpoint::UpdateLink => "update link",
            Endpoint::DeleteLinks => "delete links",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = match self {
            Endpoint::About => "GET /about",
            Endpoint::AccountMe => "GET /auth/me",
            Endpoint::CreateLink => "POST /sharex",
            Endpoint::UpdateLink => "PATCH /link",
            Endpoint::DeleteLinks => "DELETE /link",
        };
        f.write_str(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(String),
}

enum Rule {
    Success,
    Message(&'static str),
}

/// `None` matches every endpoint. The first matching row wins.
const RULES: &[(Option<Endpoint>, u16, Rule)] = &[
    (None, 200, Rule::Success),
    (None, 401, Rule::Message("Unauthorized")),
    (
        Some(Endpoint::CreateLink),
        409,
        Rule::Message("A link with that destination already exists."),
    ),
    (
        Some(Endpoint::CreateLink),
        422,
        Rule::Message("The destination does not match the required URL format."),
    ),
    (
        Some(Endpoint::UpdateLink),
        403,
        Rule::Message("You do not have permission to edit this link."),
    ),
    (
        Some(Endpoint::UpdateLink),
        404,
        Rule::Message("A link with that id does not exist."),
    ),
    (
        Some(Endpoint::UpdateLink),
        409,
        Rule::Message("A link with that slug or destination already exists."),
    ),
    (
        Some(Endpoint::UpdateLink),
        422,
        Rule::Message("Invalid slug or destination format."),
    ),
    (
        Some(Endpoint::DeleteLinks),
        403,
        Rule::Message(
            "You do not have permission to delete one or more of these links. No links were deleted.",
        ),
    ),
];

/// Map a response status to what the user sees. Depends only on the
/// endpoint and the status, never on the body.
pub fn map_status(endpoint: Endpoint, status: u16) -> Outcome {
    let rule = RULES.iter().find(|(target, code, _)| {
        *code == status && target.is_none_or(|only| only == endpoint)
    });

    match rule {
        Some((_, _, Rule::Success)) => Outcome::Success,
        Some((_, _, Rule::Message(message))) => Outcome::Failure((*message).to_string()),
        None => Outcome::Failure(format!(
            "Failed to {} (HTTP {})",
            endpoint.action(),
            status
        )),
    }
}
