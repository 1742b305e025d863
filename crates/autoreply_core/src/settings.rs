use std::time::Duration;

pub const DEFAULT_QR_PAYLOAD: &str = "https://wa.me/qr/DEMO-AUTO-REPLY-SIMULATOR";

/// Rule present when a session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSeed {
    pub trigger: String,
    pub response: String,
    pub enabled: bool,
}

impl RuleSeed {
    pub fn new(trigger: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            response: response.into(),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorSettings {
    /// Delay between the connect action and the connection completing.
    pub connect_delay: Duration,
    /// Simulated typing latency before an auto-reply lands.
    pub reply_delay: Duration,
    pub qr_payload: String,
    pub seed_rules: Vec<RuleSeed>,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            connect_delay: Duration::from_millis(2000),
            reply_delay: Duration::from_millis(1000),
            qr_payload: DEFAULT_QR_PAYLOAD.to_string(),
            seed_rules: vec![
                RuleSeed::new(
                    "hello",
                    "Hi! Thanks for reaching out. How can I help you today?",
                ),
                RuleSeed::new(
                    "price",
                    "Please check our pricing page or contact sales for detailed information.",
                ),
                RuleSeed::new("hours", "We are available Monday-Friday, 9 AM - 6 PM EST."),
            ],
        }
    }
}
