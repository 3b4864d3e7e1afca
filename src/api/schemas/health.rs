use serde::{Deserialize, Serialize};

/// Approximate queue depth: a message count normally, a `FAIL:` string when
/// the queue directory cannot be walked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MailQueueDepth {
    Messages(u64),
    Failed(String),
}

/// The flat report returned by `GET /health`, built fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub mysql: String,
    pub mailqueue: MailQueueDepth,
    pub load: String,
    pub rootfs: String,
    pub tmpfs: String,
    /// Omitted entirely when the website probe is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(mailqueue: MailQueueDepth, website: Option<String>) -> HealthReport {
        HealthReport {
            status: "OK".to_owned(),
            mysql: "OK".to_owned(),
            mailqueue,
            load: "0.15".to_owned(),
            rootfs: "75.00".to_owned(),
            tmpfs: "1.02".to_owned(),
            website,
        }
    }

    #[test]
    fn mailqueue_serializes_as_number() {
        let value = serde_json::to_value(report(MailQueueDepth::Messages(3), Some("OK".to_owned()))).unwrap();
        assert_eq!(value["mailqueue"], 3);
        assert_eq!(value["website"], "OK");
    }

    #[test]
    fn mailqueue_failure_serializes_as_string() {
        let value =
            serde_json::to_value(report(MailQueueDepth::Failed("FAIL: queue walk failed".to_owned()), None)).unwrap();
        assert_eq!(value["mailqueue"], "FAIL: queue walk failed");
    }

    #[test]
    fn website_field_is_omitted_when_disabled() {
        let value = serde_json::to_value(report(MailQueueDepth::Messages(0), None)).unwrap();
        assert!(value.get("website").is_none());
    }

    #[test]
    fn report_round_trips() {
        let json = r#"{"status":"OK","mysql":"FAIL: Query error","mailqueue":7,"load":"0.00","rootfs":"42.11","tmpfs":"0.01","website":"FAIL: HTTP 503"}"#;
        let parsed: HealthReport = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.mailqueue, MailQueueDepth::Messages(7));
        assert_eq!(parsed.website.as_deref(), Some("FAIL: HTTP 503"));
    }
}
