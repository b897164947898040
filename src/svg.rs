use std::fmt::{self, Write as _};
use std::path::Path;

use tracing::info;

use crate::LineTraceResult;
use crate::config::PathStyle;

/// A single drawing command inside a path's `d` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCommand {
    MoveTo(u32, u32),
    LineTo(u32, u32),
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(x, y) => write!(f, "M {x} {y}"),
            PathCommand::LineTo(x, y) => write!(f, "L {x} {y}"),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

/// Drawing commands plus the paint used to stroke them.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorPath {
    pub commands: Vec<PathCommand>,
    pub style: PathStyle,
}

impl VectorPath {
    /// The `d` attribute value.
    pub fn data(&self) -> LineTraceResult<String> {
        let mut d = String::new();
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            write!(d, "{command}")?;
        }
        Ok(d)
    }
}

/// An SVG document with a fixed canvas and an ordered list of paths.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    pub width: u32,
    pub height: u32,
    pub paths: Vec<VectorPath>,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            paths: Vec::new(),
        }
    }

    pub fn add_path(&mut self, path: VectorPath) {
        self.paths.push(path);
    }

    /// Render the document as SVG text.
    pub fn render(&self) -> LineTraceResult<String> {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
        writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" baseProfile=\"full\" width=\"{}\" height=\"{}\">",
            self.width, self.height
        )?;
        for path in &self.paths {
            writeln!(
                out,
                "<path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" />",
                path.data()?,
                escape_attr(&path.style.fill),
                escape_attr(&path.style.stroke),
                path.style.stroke_width
            )?;
        }
        out.push_str("</svg>\n");
        Ok(out)
    }

    /// Render and write the document to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> LineTraceResult<()> {
        let path = path.as_ref();
        let svg = self.render()?;
        std::fs::write(path, svg)?;
        info!(path = %path.display(), paths = self.paths.len(), "wrote SVG document");
        Ok(())
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
