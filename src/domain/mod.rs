pub mod dubbing;
pub mod locale;
pub mod ssml;
pub mod transcript;
