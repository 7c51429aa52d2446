use derive_more::Display;

const STEAM_COMMUNITY_HOST: &str = "steamcommunity.com";
const STEAM_ID64_DIGITS: usize = 17;

/// What the user typed into the lookup field.
///
/// Accepted forms:
/// - a bare 17-digit SteamID64
/// - `[http[s]://]steamcommunity.com/profiles/<digits>`
/// - `[http[s]://]steamcommunity.com/id/<vanity>`
/// - anything else non-blank, taken as a vanity name
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ProfileQuery {
    #[display(fmt = "empty query")]
    Empty,
    #[display(fmt = "steamid {}", _0)]
    SteamId(String),
    #[display(fmt = "vanity '{}'", _0)]
    Vanity(String),
}

impl ProfileQuery {
    pub fn parse(input: &str) -> Self {
        let text = input.trim();
        if text.is_empty() {
            return ProfileQuery::Empty;
        }

        if text.len() == STEAM_ID64_DIGITS && text.bytes().all(|b| b.is_ascii_digit()) {
            return ProfileQuery::SteamId(text.to_string());
        }

        if let Some(path) = community_path(text) {
            if let Some(rest) = path.strip_prefix("profiles/") {
                let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
                if !digits.is_empty() {
                    return ProfileQuery::SteamId(digits);
                }
            }
            if let Some(rest) = path.strip_prefix("id/") {
                let name = rest.split('/').next().unwrap_or_default();
                if !name.is_empty() {
                    return ProfileQuery::Vanity(name.to_string());
                }
            }
        }

        ProfileQuery::Vanity(text.to_string())
    }

    /// Numeric id when no vanity resolution is needed
    pub fn steam_id(&self) -> Option<&str> {
        match self {
            ProfileQuery::SteamId(id) => Some(id),
            _ => None,
        }
    }

    pub fn needs_vanity_resolution(&self) -> bool {
        matches!(self, ProfileQuery::Vanity(_))
    }
}

/// Path after `steamcommunity.com/`, with an optional http(s) scheme.
fn community_path(text: &str) -> Option<&str> {
    let without_scheme = text
        .strip_prefix("https://")
        .or_else(|| text.strip_prefix("http://"))
        .unwrap_or(text);
    without_scheme
        .strip_prefix(STEAM_COMMUNITY_HOST)
        .and_then(|rest| rest.strip_prefix('/'))
}
