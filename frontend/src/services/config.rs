use log::LevelFilter;
use shared::MonthRef;

const DEFAULT_CALENDAR_PATH: &str = "/monthly-log/api";

/// Endpoint and logging settings, baked in at build time
///
/// `TIMELOG_API_BASE_URL` (default: same origin), `TIMELOG_CALENDAR_PATH`
/// (default: `/monthly-log/api`) and `TIMELOG_LOG_LEVEL` (default: `info`).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub calendar_path: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TIMELOG_API_BASE_URL"),
            option_env!("TIMELOG_CALENDAR_PATH"),
            option_env!("TIMELOG_LOG_LEVEL"),
        )
    }

    fn from_values(base_url: Option<&str>, calendar_path: Option<&str>, log_level: Option<&str>) -> Self {
        let calendar_path = calendar_path
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_CALENDAR_PATH);

        Self {
            api_base_url: base_url.unwrap_or_default().trim_end_matches('/').to_string(),
            calendar_path: format!("/{}", calendar_path.trim_matches('/')),
            log_level: log_level
                .and_then(|level| level.parse().ok())
                .unwrap_or(LevelFilter::Info),
        }
    }

    fn endpoint(&self, suffix: &str) -> String {
        format!("{}{}/{}", self.api_base_url, self.calendar_path, suffix)
    }

    /// `GET {base}/{year}/{month}`
    pub fn month_url(&self, month: MonthRef) -> String {
        self.endpoint(&format!("{}/{}", month.year, month.month))
    }

    /// `GET {base}/absence-codes`
    pub fn absence_codes_url(&self) -> String {
        self.endpoint("absence-codes")
    }

    /// `POST {base}/update-days`
    pub fn update_days_url(&self) -> String {
        self.endpoint("update-days")
    }
}
