//! Form submission payloads
//!
//! `serialize` turns a snapshot into the ordered, multi-valued `FormPayload`
//! the setup endpoint expects.

mod payload;
mod serializer;

pub use payload::FormPayload;
pub use serializer::{
    serialize, CONFIG_CHANGED_FIELD, CONFIG_CHANGED_VALUE, CONSTANT_FIELDS, DIVISIONS_FIELD,
    DIVISION_NAME_PREFIX, EDITED_MANUALLY_FIELD, EDITED_PERIOD_FIELD, MATCHUPS_FIELD,
    TEAM_NAME_PREFIX, TEAM_SHORT_NAME_PREFIX,
};
