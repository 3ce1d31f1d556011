//! Embedded static data consumed by the engine as immutable input:
//! the golfer card pool and the built-in courses.

pub mod courses;
pub mod golfers;

pub use courses::{
    augusta_front_nine, championship_course, course_by_id, pebble_beach_front_nine,
    COURSE_AUGUSTA_FRONT9, COURSE_CHAMPIONSHIP, COURSE_PEBBLE_FRONT9,
};
pub use golfers::{all_golfers, golfer_by_id, random_golfers, DEFAULT_HAND_SIZE, GOLFER_POOL};
