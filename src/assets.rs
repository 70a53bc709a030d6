const DASHBOARD_CSS: &str = include_str!("../assets/dashboard.css");

const FONT_LINKS: [(&str, &str, bool); 3] = [
    ("preconnect", "https://fonts.googleapis.com", false),
    ("preconnect", "https://fonts.gstatic.com", true),
    (
        "stylesheet",
        "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap",
        false,
    ),
];

pub fn dashboard_css() -> &'static str {
    DASHBOARD_CSS
}

/// `<link>` tags for the web font; the only external reference in the page.
pub fn font_link_tags() -> String {
    FONT_LINKS
        .iter()
        .map(|(rel, href, crossorigin)| {
            let suffix = if *crossorigin { " crossorigin" } else { "" };
            format!(r#"<link rel="{rel}" href="{href}"{suffix}>"#)
        })
        .collect::<Vec<_>>()
        .join("\n    ")
}
