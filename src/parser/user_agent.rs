use crate::domain::model::ReadableUserAgent;
use regex::Regex;

/// Resolves a raw user-agent string into a [`ReadableUserAgent`].
pub trait UserAgentParser: Send + Sync {
    /// `None` when the string cannot be resolved.
    fn parse(&self, raw: &str) -> Option<ReadableUserAgent>;
}

/// Pattern-based resolver covering the browsers and platforms that show up
/// in the session list.
pub struct RegexUserAgentParser {
    browsers: Vec<(&'static str, Regex)>,
    systems: Vec<(&'static str, Regex)>,
}

// Order matters: Edge and Opera also advertise Chrome, Chrome advertises Safari,
// iOS advertises Mac OS X and Android advertises Linux.
const BROWSER_PATTERNS: &[(&str, &str)] = &[
    ("Edge", r"Edg(?:e|A|iOS)?/([\d.]+)"),
    ("Opera", r"(?:OPR|Opera)/([\d.]+)"),
    ("Firefox", r"(?:Firefox|FxiOS)/([\d.]+)"),
    ("Chrome", r"(?:Chrome|CriOS)/([\d.]+)"),
    ("Safari", r"Version/([\d.]+).*Safari/"),
];

const SYSTEM_PATTERNS: &[(&str, &str)] = &[
    ("Windows", r"Windows NT ([\d.]+)"),
    ("iOS", r"(?:iPhone|iPad|CPU) OS ([\d_]+)"),
    ("Android", r"Android ([\d.]+)"),
    ("macOS", r"Mac OS X ([\d_.]+)"),
    ("Linux", r"Linux()"),
];

fn compile(patterns: &[(&'static str, &str)]) -> Vec<(&'static str, Regex)> {
    patterns
        .iter()
        .map(|(name, pattern)| (*name, Regex::new(pattern).expect("static user-agent pattern")))
        .collect()
}

fn first_match(rules: &[(&'static str, Regex)], raw: &str) -> Option<(String, String)> {
    rules.iter().find_map(|(name, re)| {
        re.captures(raw).map(|caps| {
            let version = caps.get(1).map_or("", |m| m.as_str()).replace('_', ".");
            (name.to_string(), version)
        })
    })
}

fn device(raw: &str) -> &'static str {
    if raw.contains("iPad") || (raw.contains("Android") && !raw.contains("Mobile")) {
        "Tablet"
    } else if raw.contains("Mobile") || raw.contains("iPhone") {
        "Mobile"
    } else {
        "Desktop"
    }
}

impl RegexUserAgentParser {
    pub fn new() -> Self {
        Self {
            browsers: compile(BROWSER_PATTERNS),
            systems: compile(SYSTEM_PATTERNS),
        }
    }
}

impl Default for RegexUserAgentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl UserAgentParser for RegexUserAgentParser {
    fn parse(&self, raw: &str) -> Option<ReadableUserAgent> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let (browser, browser_version) = first_match(&self.browsers, raw)?;
        let (operating_system, operating_system_version) =
            first_match(&self.systems, raw).unwrap_or_default();

        Some(ReadableUserAgent {
            browser,
            browser_version,
            operating_system,
            operating_system_version,
            device: device(raw).to_string(),
        })
    }
}
