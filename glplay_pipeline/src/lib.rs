//! Everything in the rendering pipeline that can be reasoned about without an OpenGL context.
//!
//! The windowed binary owns the GPU objects; this crate owns the data that describes them, so it
//! can be tested on a machine with no display at all.

pub mod source;
pub mod layout;
pub mod uniforms;
pub mod projection;

pub use self::layout::{AttributeSlot, ElementKind, VertexComponent, VertexElement, VertexLayout};
pub use self::projection::Ortho;
pub use self::source::{ShaderSource, ShaderStage, SourceError};
pub use self::uniforms::UniformCache;
