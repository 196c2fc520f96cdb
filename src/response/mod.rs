pub mod generator;
pub mod ports;
pub mod template;
pub mod types;

pub use generator::ResponseGenerator;
pub use ports::ResponseComposer;
pub use template::TemplateComposer;
pub use types::GenerationOptions;
