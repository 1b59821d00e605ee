pub(crate) mod css;
pub(crate) mod object;
pub(crate) mod summary;
pub(crate) mod walk;

/// `@keyframes` rule name.
pub const ANIMATION_NAME: &str = "spring-animation";
/// Selector of the companion rule binding the animation.
pub const ANIMATING_SELECTOR: &str = ".animating .body-square";
/// Selector of the animated element in the usage comment.
pub const ELEMENT_SELECTOR: &str = ".body-square";
/// Variable name of the generated keyframe list.
pub const KEYFRAMES_VAR: &str = "springKeyframes";
