//! Text dump of an adjacency matrix.
//!
//! The layout is a legend mapping indices to labels followed by the grid,
//! framed by 50-character rules. Every index and cell sits in a
//! left-justified field of width 4.

use crate::matrix::AdjacencyMatrix;
use crate::{DirectedGraph, Error};
use std::fmt::Write;

const WIDTH: usize = 50;

/// Variant of the text dump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Style {
    /// Titled ` Adjacency matrix`, edges marked `1`.
    #[default]
    Plain,
    /// Titled ` <n>. Adjacency matrix`, edges marked `+`.
    Captioned(i32),
}

impl Style {
    fn present(self) -> &'static str {
        match self {
            Style::Plain => "1",
            Style::Captioned(_) => "+",
        }
    }
}

const ABSENT: &str = "-";

fn rule<W: Write>(out: &mut W, c: char) -> Result<(), Error> {
    for _ in 0..WIDTH {
        out.write_char(c)?;
    }
    Ok(())
}

fn index_row<W: Write>(out: &mut W, n: usize) -> Result<(), Error> {
    out.write_str("    ")?;
    for i in 0..n {
        write!(out, "{:<4}", i)?;
    }
    out.write_str("    \n")?;
    Ok(())
}

impl<G: DirectedGraph> AdjacencyMatrix<'_, G> {
    /// Render the matrix with `1` for edges.
    ///
    /// ```
    /// use adjacency_matrix::example::Graph;
    /// use adjacency_matrix::AdjacencyMatrix;
    ///
    /// let g = Graph::new(&["B", "A"], &[("A", "B")]);
    /// let text = AdjacencyMatrix::new(&g).render().unwrap();
    /// assert!(text.contains("0 : A\n1 : B\n"));
    /// assert!(text.contains("0   -   1   0   \n"));
    /// ```
    pub fn render(&self) -> Result<String, Error> {
        self.render_styled(Style::Plain)
    }

    /// Render the matrix titled with `caption`, with `+` for edges.
    pub fn render_captioned(&self, caption: i32) -> Result<String, Error> {
        self.render_styled(Style::Captioned(caption))
    }

    fn render_styled(&self, style: Style) -> Result<String, Error> {
        let n = self.len();
        let mut buf = String::with_capacity(4 * WIDTH + (n + 3) * (4 * n + 12));
        self.render_to(&mut buf, style)?;
        Ok(buf)
    }

    /// Write the rendering into `out`.
    ///
    /// The output ends with the closing rule, without a newline.
    pub fn render_to<W: Write>(&self, out: &mut W, style: Style) -> Result<(), Error> {
        let matrix = self.build()?;
        let n = self.len();

        rule(out, '=')?;
        match style {
            Style::Plain => out.write_str("\n Adjacency matrix\n")?,
            Style::Captioned(caption) => write!(out, "\n {}. Adjacency matrix\n", caption)?,
        }
        rule(out, '-')?;
        out.write_char('\n')?;

        for (i, v) in self.vertices().iter().enumerate() {
            writeln!(out, "{} : {}", i, v)?;
        }
        rule(out, '-')?;
        out.write_char('\n')?;

        index_row(out, n)?;
        for i in 0..n {
            write!(out, "{:<4}", i)?;
            for &edge in matrix.row(i) {
                let mark = if edge { style.present() } else { ABSENT };
                write!(out, "{:<4}", mark)?;
            }
            writeln!(out, "{:<4}", i)?;
        }
        index_row(out, n)?;

        rule(out, '=')
    }
}
