mod profile_photo;
mod sections;
mod status_badge;
mod theme_toggle;

pub use profile_photo::ProfilePhoto;
pub use sections::Section;
pub use status_badge::StatusBadge;
pub use theme_toggle::ThemeToggle;
