use std::path::{Path, PathBuf};

pub const STATS_FILE: &str = "data/stats.json";
pub const STATE_FILE: &str = "data/bot_state.json";
pub const OUTPUT_FILE: &str = "docs/index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardPaths {
    pub stats_file: PathBuf,
    pub state_file: PathBuf,
    pub output_file: PathBuf,
}

impl DashboardPaths {
    /// Layout relative to the current working directory.
    pub fn resolve() -> Self {
        Self {
            stats_file: PathBuf::from(STATS_FILE),
            state_file: PathBuf::from(STATE_FILE),
            output_file: PathBuf::from(OUTPUT_FILE),
        }
    }

    pub fn under(root: &Path) -> Self {
        Self {
            stats_file: root.join(STATS_FILE),
            state_file: root.join(STATE_FILE),
            output_file: root.join(OUTPUT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DashboardPaths;
    use std::path::PathBuf;

    #[test]
    fn resolved_paths_stay_relative_to_cwd() {
        let paths = DashboardPaths::resolve();
        assert_eq!(paths.output_file.display().to_string(), "docs/index.html");
        assert!(paths.stats_file.is_relative());
        assert!(paths.state_file.is_relative());
    }

    #[test]
    fn rooted_paths_share_the_fixed_layout() {
        let paths = DashboardPaths::under(&PathBuf::from("/srv/bot"));
        assert_eq!(paths.stats_file, PathBuf::from("/srv/bot/data/stats.json"));
        assert_eq!(paths.state_file, PathBuf::from("/srv/bot/data/bot_state.json"));
        assert_eq!(paths.output_file, PathBuf::from("/srv/bot/docs/index.html"));
    }
}
