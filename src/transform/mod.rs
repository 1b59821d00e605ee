pub(crate) mod compose;
pub(crate) mod round;
pub(crate) mod serialize;
