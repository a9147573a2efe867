//! Splitting a combined shader file into its vertex and fragment stages.
//!
//! A combined shader file looks as follows:
//!
//! ```text
//! #shader vertex
//! #version 330 core
//! ...
//!
//! #shader fragment
//! #version 330 core
//! ...
//! ```
//!
//! Every line containing the `#shader` marker is a directive. The directive switches the stage
//! that the following lines belong to, and the lines are copied verbatim (blank lines included)
//! until the next directive or the end of the file. Lines before the first directive are dropped.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The marker that turns a line into a directive.
pub const DIRECTIVE: &str = "#shader";

/// The programmable stages a combined shader file can hold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The keyword that selects this stage in a directive line.
    pub fn keyword(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }

    /// Which stage a directive line selects, if any. `vertex` wins over `fragment` when a line
    /// somehow names both.
    fn from_directive(line: &str) -> Option<Self> {
        if line.contains(ShaderStage::Vertex.keyword()) {
            Some(ShaderStage::Vertex)
        } else if line.contains(ShaderStage::Fragment.keyword()) {
            Some(ShaderStage::Fragment)
        } else {
            None
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} shader", self.keyword())
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not read shader file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The two stage sources extracted from one combined shader file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSource {
    pub fn parse(text: &str) -> Self {
        let mut source = Self::default();
        let mut target: Option<ShaderStage> = None;

        for line in text.lines() {
            if line.contains(DIRECTIVE) {
                // Unknown directives leave the current target alone
                if let Some(stage) = ShaderStage::from_directive(line) {
                    target = Some(stage);
                }
                continue;
            }

            if let Some(stage) = target {
                let blob = source.stage_mut(stage);
                blob.push_str(line);
                blob.push('\n');
            }
        }

        source
    }

    /// Reads and splits a combined shader file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::parse(&text))
    }

    pub fn stage(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }

    fn stage_mut(&mut self, stage: ShaderStage) -> &mut String {
        match stage {
            ShaderStage::Vertex => &mut self.vertex,
            ShaderStage::Fragment => &mut self.fragment,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertex.is_empty() && self.fragment.is_empty()
    }

    /// Renders both stages back into the combined file format.
    pub fn annotated(&self) -> String {
        let mut out = String::with_capacity(self.vertex.len() + self.fragment.len() + 40);

        for &stage in &[ShaderStage::Vertex, ShaderStage::Fragment] {
            out.push_str(DIRECTIVE);
            out.push(' ');
            out.push_str(stage.keyword());
            out.push('\n');
            out.push_str(self.stage(stage));
        }

        out
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn splits_lines_under_their_directives() {
        let text = "#shader vertex\nA\nB\n#shader fragment\nC\n";
        let source = ShaderSource::parse(text);

        assert_eq!(source.vertex, "A\nB\n");
        assert_eq!(source.fragment, "C\n");
    }

    #[test]
    fn no_directives_means_no_sources() {
        let source = ShaderSource::parse("void main() {}\nvertex fragment\n");

        assert!(source.is_empty());
        assert_eq!(source, ShaderSource::default());
    }

    #[test]
    fn unknown_directive_keeps_the_current_stage() {
        let text = "#shader vertex\nA\n#shader geometry\nB\n#shader fragment\nC\n";
        let source = ShaderSource::parse(text);

        assert_eq!(source.vertex, "A\nB\n");
        assert_eq!(source.fragment, "C\n");
    }

    #[test]
    fn unknown_directive_before_any_stage_selects_nothing() {
        let source = ShaderSource::parse("#shader tessellation\nA\n#shader fragment\nB\n");

        assert_eq!(source.vertex, "");
        assert_eq!(source.fragment, "B\n");
    }

    #[test]
    fn keywords_without_the_marker_are_content() {
        let text = "#shader vertex\nlayout(location = 0) in vec4 vertex_position;\n\
                    // the fragment stage follows\n#shader fragment\nout vec4 color;\n";
        let source = ShaderSource::parse(text);

        assert_eq!(
            source.vertex,
            "layout(location = 0) in vec4 vertex_position;\n// the fragment stage follows\n"
        );
        assert_eq!(source.fragment, "out vec4 color;\n");
    }

    #[test]
    fn blank_lines_are_kept_verbatim() {
        let source = ShaderSource::parse("#shader fragment\n\nA\n\n");

        assert_eq!(source.fragment, "\nA\n\n");
        assert_eq!(source.vertex, "");
    }

    #[test]
    fn repeated_directives_append_to_the_same_stage() {
        let text = "#shader vertex\nA\n#shader fragment\nB\n#shader vertex\nC\n";
        let source = ShaderSource::parse(text);

        assert_eq!(source.vertex, "A\nC\n");
        assert_eq!(source.fragment, "B\n");
    }

    #[test]
    fn annotated_output_splits_back_into_the_same_sources() {
        let text = "junk before\n#shader fragment\nC\n\n#shader vertex\n#version 330 core\nA\n";
        let source = ShaderSource::parse(text);
        let reparsed = ShaderSource::parse(&source.annotated());

        assert_eq!(reparsed, source);
        assert_eq!(reparsed.annotated(), source.annotated());
    }

    #[test]
    fn loads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "#shader vertex\nA\n#shader fragment\nB\n").unwrap();

        let source = ShaderSource::load(file.path()).unwrap();

        assert_eq!(source.stage(ShaderStage::Vertex), "A\n");
        assert_eq!(source.stage(ShaderStage::Fragment), "B\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.shader");

        match ShaderSource::load(&missing) {
            Err(SourceError::Io { path, .. }) => assert_eq!(path, missing),
            Ok(source) => panic!("expected an error, got {:?}", source),
        }
    }

    #[test]
    fn stage_display_names_the_stage() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex shader");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment shader");
    }
}
