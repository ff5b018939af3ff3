pub mod checklist;
pub mod key_points;
pub mod rating;
pub mod red_flags;
