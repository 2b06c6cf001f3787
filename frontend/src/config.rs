use log::Level;

pub const SITE_NAME: &str = "EduTech";
pub const COPYRIGHT_YEAR: u16 = 2025;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
