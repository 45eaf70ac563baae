mod generator;
mod java_file;
mod render;

pub use generator::Generator;
pub use java_file::{HEADER, JavaFile};
pub use render::Java;
pub use shiv_core::{GenerateResult, HostFailure, LanguageCodegen, PreviewFile};
