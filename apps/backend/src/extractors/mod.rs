pub mod form_or_json;
pub mod player_id;
