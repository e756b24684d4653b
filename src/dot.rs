//! Graphviz DOT export
//!
//! Renders the implicit tree of a heap as a `digraph` of record nodes. Each
//! occupied index `i` becomes `node{i}` with three fields: `f0` (left
//! port), `f1` (the element) and `f2` (right port). Edges run from `f0` to
//! the left child and from `f2` to the right child.
//!
//! ```text
//! digraph Heap {
//!     node [shape=record]
//!
//!     node0 [label = "<f0> |<f1> 1|<f2> "]
//!     node0:f0 -> node1:f1
//!     node1 [label = "<f0> |<f1> 2|<f2> "]
//! }
//! ```
//!
//! Render with `dot -Tpng heap.dot -o heap.png`.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::binary_min::BinaryMinHeap;

/// Writes the DOT description of `elements`, taken in heap order
pub fn write_dot<T: Display, W: Write>(elements: &[T], mut out: W) -> io::Result<()> {
    writeln!(out, "digraph Heap {{\n\tnode [shape=record]\n")?;

    let len = elements.len();
    for (i, element) in elements.iter().enumerate() {
        writeln!(out, "\tnode{} [label = \"<f0> |<f1> {}|<f2> \"]", i, element)?;

        let left = 2 * i + 1;
        let right = 2 * i + 2;
        if left < len {
            writeln!(out, "\tnode{}:f0 -> node{}:f1", i, left)?;
        }
        if right < len {
            writeln!(out, "\tnode{}:f2 -> node{}:f1", i, right)?;
        }
    }

    writeln!(out, "}}")?;
    out.flush()
}

/// Returns the DOT description of `elements` as a string
pub fn render_dot<T: Display>(elements: &[T]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_dot(elements, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

impl<T: Display, C> BinaryMinHeap<T, C> {
    /// Writes this heap's DOT description to the file at `path`
    ///
    /// The file is created or truncated. Failures are logged at `warn` level
    /// and returned; the heap itself is never affected.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the file cannot be created or
    /// written.
    pub fn generate_dot_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        let result = File::create(path)
            .and_then(|file| write_dot(self.as_slice(), BufWriter::new(file)));

        match &result {
            Ok(()) => tracing::debug!(
                path = %path.display(),
                nodes = self.as_slice().len(),
                "wrote heap DOT file"
            ),
            Err(e) => tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to write heap DOT file"
            ),
        }

        result
    }
}
