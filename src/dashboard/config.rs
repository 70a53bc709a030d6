#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

impl FooterLink {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Static identity of the rendered page plus the fixed selection limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub bot_name: String,
    pub community: String,
    pub crosspost_target: String,
    pub description: String,
    pub footer_links: Vec<FooterLink>,
    pub crosspost_history_limit: usize,
    pub title_max_chars: usize,
    pub automation_account: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bot_name: "Optimist Prime".to_string(),
            community: "r/accelerate".to_string(),
            crosspost_target: "r/ProAI".to_string(),
            description: "Live statistics dashboard for the Optimist Prime bot on r/accelerate"
                .to_string(),
            footer_links: vec![
                FooterLink::new("GitHub Actions", "https://github.com/features/actions"),
                FooterLink::new("Google Gemini", "https://ai.google.dev/"),
                FooterLink::new("r/accelerate", "https://reddit.com/r/accelerate"),
                FooterLink::new("r/ProAI", "https://reddit.com/r/ProAI"),
            ],
            crosspost_history_limit: 5,
            title_max_chars: 60,
            automation_account: "AutoModerator".to_string(),
        }
    }
}
