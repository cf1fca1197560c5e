/// Platform classification of a requesting client.
///
/// Derived from the request's user-agent string with simple
/// case-insensitive substring matches. Deliberately a three-way
/// classification, not a full device-detection layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
    /// Desktop browsers and anything unrecognized.
    Other,
}

impl Platform {
    /// Classifies a user-agent string. Unknown or empty signals default
    /// to [`Platform::Other`]; this never fails.
    pub fn classify(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if ua.contains("iphone") || ua.contains("ipad") || ua.contains("ipod") {
            Platform::Ios
        } else if ua.contains("android") {
            Platform::Android
        } else {
            Platform::Other
        }
    }

    /// Whether this platform gets an automatic store redirect.
    pub fn is_mobile(self) -> bool {
        matches!(self, Platform::Ios | Platform::Android)
    }
}
