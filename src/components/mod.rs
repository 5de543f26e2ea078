pub mod avatar_picker;
pub mod home;
pub mod new_user_form;
