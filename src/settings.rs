use std::time::Duration;

pub const TICK_PERIOD: Duration = Duration::from_millis(500);

pub const DEFAULT_FONT_SIZE_PT: f32 = 200.0;

#[derive(Debug, Clone)]
pub struct ManagerDefaults {
    pub font_size_input: String,
    pub timer_seconds_input: String,
    pub timer_font_size_pt: f32,
}

impl Default for ManagerDefaults {
    fn default() -> Self {
        Self {
            font_size_input: "200".to_string(),
            timer_seconds_input: "90".to_string(),
            timer_font_size_pt: DEFAULT_FONT_SIZE_PT,
        }
    }
}

pub fn about_text() -> String {
    format!(
        "Fullclock: big-text clock, countdown and timer windows.\nCreated by {}.\nVersion: {}",
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_form_values() {
        let defaults = ManagerDefaults::default();
        assert_eq!(defaults.font_size_input, "200");
        assert_eq!(defaults.timer_seconds_input, "90");
        assert_eq!(defaults.timer_font_size_pt, 200.0);
    }

    #[test]
    fn about_text_names_version() {
        assert!(about_text().contains(env!("CARGO_PKG_VERSION")));
    }
}
