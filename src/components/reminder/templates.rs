use super::models::{DateTimeParts, ReminderKind};

/// Fill the template of `kind`. `info` must hold at least
/// `kind.required_fields().len()` entries.
pub(super) fn render(
    kind: &ReminderKind,
    info: &[String],
    location: &str,
    when: &DateTimeParts,
) -> String {
    let date = &when.date;
    let time = &when.time;

    match kind {
        ReminderKind::CourtReminder => format!(
            "Hi, reminder to attend {} on {} at {}. \
             Any questions call {}, Victoria Legal Aid on {}.",
            location, date, time, info[0], info[1]
        ),
        ReminderKind::AppointmentReminder => format!(
            "Hi, reminder to attend your appointment with Victoria Legal Aid at {} on {} at {}. \
             To change, call {} on {}.",
            location, date, time, info[0], info[1]
        ),
        ReminderKind::SpecialistAppointment => format!(
            "Reminder of your appointment with {} on {} at {} at {}. \
             Any questions call {}, Victoria Legal Aid on {}.",
            info[0], date, time, location, info[1], info[2]
        ),
        ReminderKind::SupplyInfo => format!(
            "Hi, reminder to {} {}. Any questions call {}, Victoria Legal Aid on {}.",
            info[0], date, info[1], info[2]
        ),
        ReminderKind::BarristerBriefed => format!(
            "Hi, reminder to meet your barrister {} at {} Court {} {}. \
             Any questions call {}, Victoria Legal Aid on {}.",
            info[0], location, time, date, info[1], info[2]
        ),
        ReminderKind::CallBack => format!(
            "Hi, I rang you on {} but there was no answer. \
             Could you please call {}, Victoria Legal Aid on {}.",
            date, info[0], info[1]
        ),
        ReminderKind::Unknown(_) => String::new(),
    }
}
