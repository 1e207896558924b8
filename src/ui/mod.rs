// UI and user interaction module

pub mod prompts;

// Re-export commonly used items for cleaner imports
pub use prompts::ConfigPrompt;
