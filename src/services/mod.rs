// ReadHub services
// Services provide core functionality: the article catalog and reader settings.

pub mod catalog;
pub mod settings_engine;
