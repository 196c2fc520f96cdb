pub mod facade;
pub mod noop;
pub mod ports;

pub use facade::EmotionalAnalyzer;
pub use noop::NeutralSignalDetector;
pub use ports::SignalDetector;
