pub mod card_view;
pub mod carousel_view;
pub mod edit_overlay;
pub mod skeleton;
