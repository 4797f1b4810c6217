use crate::domain::entities::EventDraft;
use crate::shared::error::AppError;

pub const MAX_EVENT_NAME_CHARS: usize = 30;
pub const MAX_EVENT_DESCRIPTION_CHARS: usize = 200;
pub const MIN_EVENT_THEMES: usize = 1;
pub const MAX_EVENT_THEMES: usize = 3;
pub const MIN_EVENT_CAPACITY: u32 = 1;
pub const MAX_EVENT_CAPACITY: u32 = 1000;
pub const MIN_RATING_VALUE: u8 = 1;
pub const MAX_RATING_VALUE: u8 = 5;

pub fn validate_rating_value(value: u8) -> Result<(), AppError> {
    if !(MIN_RATING_VALUE..=MAX_RATING_VALUE).contains(&value) {
        return Err(AppError::InvalidInput(format!(
            "rating value {value} is outside {MIN_RATING_VALUE}..={MAX_RATING_VALUE}"
        )));
    }
    Ok(())
}

pub fn validate_event_draft(draft: &EventDraft) -> Result<(), AppError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidInput("event name is empty".to_string()));
    }
    if name.chars().count() > MAX_EVENT_NAME_CHARS {
        return Err(AppError::InvalidInput(format!(
            "event name exceeds {MAX_EVENT_NAME_CHARS} characters"
        )));
    }
    if draft.description.chars().count() > MAX_EVENT_DESCRIPTION_CHARS {
        return Err(AppError::InvalidInput(format!(
            "event description exceeds {MAX_EVENT_DESCRIPTION_CHARS} characters"
        )));
    }
    if !(MIN_EVENT_THEMES..=MAX_EVENT_THEMES).contains(&draft.themes.len()) {
        return Err(AppError::InvalidInput(format!(
            "event must carry {MIN_EVENT_THEMES} to {MAX_EVENT_THEMES} themes"
        )));
    }
    if !(MIN_EVENT_CAPACITY..=MAX_EVENT_CAPACITY).contains(&draft.max_people) {
        return Err(AppError::InvalidInput(format!(
            "event capacity must be within {MIN_EVENT_CAPACITY}..={MAX_EVENT_CAPACITY}"
        )));
    }
    Ok(())
}
