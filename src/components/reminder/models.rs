use serde::Serialize;

/// Reminder type selected by the code before the first `-` of a subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderKind {
    CourtReminder,
    AppointmentReminder,
    SpecialistAppointment,
    SupplyInfo,
    BarristerBriefed,
    CallBack,
    Unknown(String),
}

impl ReminderKind {
    /// Map a trimmed subject code to its kind
    pub fn from_code(code: &str) -> Self {
        match code {
            "CR" => ReminderKind::CourtReminder,
            "VAR" => ReminderKind::AppointmentReminder,
            "SAR" => ReminderKind::SpecialistAppointment,
            "RSI" => ReminderKind::SupplyInfo,
            "RBB" => ReminderKind::BarristerBriefed,
            "CBM" => ReminderKind::CallBack,
            other => ReminderKind::Unknown(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            ReminderKind::CourtReminder => "CR",
            ReminderKind::AppointmentReminder => "VAR",
            ReminderKind::SpecialistAppointment => "SAR",
            ReminderKind::SupplyInfo => "RSI",
            ReminderKind::BarristerBriefed => "RBB",
            ReminderKind::CallBack => "CBM",
            ReminderKind::Unknown(code) => code,
        }
    }

    /// Human readable label; empty for unknown codes
    pub fn label(&self) -> &'static str {
        match self {
            ReminderKind::CourtReminder => "Court Reminder",
            ReminderKind::AppointmentReminder => "VLA Appointment Reminder",
            ReminderKind::SpecialistAppointment => "Specialist appointment reminder",
            ReminderKind::SupplyInfo => "Reminder to supply info/docs",
            ReminderKind::BarristerBriefed => "Reminder of barrister briefed",
            ReminderKind::CallBack => "Call back message",
            ReminderKind::Unknown(_) => "",
        }
    }

    /// Names of the positional event info fields the template reads
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            ReminderKind::CourtReminder
            | ReminderKind::AppointmentReminder
            | ReminderKind::CallBack => &["name", "phone"],
            ReminderKind::SpecialistAppointment | ReminderKind::BarristerBriefed => {
                &["name", "name2", "phone"]
            }
            ReminderKind::SupplyInfo => &["reason", "name", "phone"],
            ReminderKind::Unknown(_) => &[],
        }
    }
}

/// Date and time of an event formatted for message text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTimeParts {
    /// `Fri, 16/09/2016`
    pub date: String,
    /// `9:30 am`
    pub time: String,
}

/// Formatted reminder for one event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReminderOutput {
    /// Last comma separated field of the subject; `None` when the subject has
    /// no `CODE - info` shape at all
    pub phone: Option<String>,
    pub event_type: String,
    pub event_template: String,
}

impl ReminderOutput {
    /// True when no template was produced
    pub fn is_empty(&self) -> bool {
        self.event_template.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_kind() {
        for code in ["CR", "VAR", "SAR", "RSI", "RBB", "CBM"] {
            let kind = ReminderKind::from_code(code);
            assert_eq!(kind.code(), code);
            assert!(!kind.label().is_empty());
            assert_eq!(kind.required_fields().last(), Some(&"phone"));
        }
    }

    #[test]
    fn test_unknown_code() {
        let kind = ReminderKind::from_code("cr");
        assert_eq!(kind, ReminderKind::Unknown("cr".to_string()));
        assert_eq!(kind.label(), "");
        assert!(kind.required_fields().is_empty());
    }
}
