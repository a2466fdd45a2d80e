use std::fmt::{self, Display, Write};

use crate::{node::Node, Tree};

/// Which branch of its parent a node hangs from, determining the connector
/// drawn before it and the indentation continued beneath it.
#[derive(Debug, Clone, Copy)]
enum Branch {
    /// Drawn below the parent (and used for the root).
    Lower,
    /// Drawn above the parent.
    Upper,
}

impl Branch {
    fn connector(self) -> &'static str {
        match self {
            Self::Lower => "└── ",
            Self::Upper => "┌── ",
        }
    }

    /// The indentation for the child drawn on `side` of a node on this
    /// branch - a vertical bar continues the line back up (or down) to this
    /// node's parent.
    fn indent(self, side: Branch) -> &'static str {
        match (self, side) {
            (Self::Lower, Self::Upper) | (Self::Upper, Self::Lower) => "|   ",
            _ => "    ",
        }
    }
}

#[derive(Debug)]
enum Line<'a, T> {
    Expand(&'a Node<T>, String, Branch),
    Emit(&'a Node<T>, String, Branch),
}

/// Render the tree sideways, with the right subtree above each node and the
/// left subtree below it.
///
/// ```text
/// |       ┌── 7
/// |   ┌── 6
/// |   |   └── 5
/// └── 4
///     |   ┌── 3
///     └── 2
///         └── 1
/// ```
///
/// An empty tree renders as an empty string.
fn render<T, W>(root: Option<&Node<T>>, w: &mut W) -> fmt::Result
where
    T: Display,
    W: Write,
{
    let mut stack = root
        .map(|v| Line::Expand(v, String::new(), Branch::Lower))
        .into_iter()
        .collect::<Vec<_>>();

    while let Some(line) = stack.pop() {
        let (n, prefix, branch) = match line {
            Line::Emit(n, prefix, branch) => {
                writeln!(w, "{prefix}{}{}", branch.connector(), n.value())?;
                continue;
            }
            Line::Expand(n, prefix, branch) => (n, prefix, branch),
        };

        // Pushed in reverse: the right subtree is drawn first.
        if let Some(left) = n.left() {
            let indent = branch.indent(Branch::Lower);
            stack.push(Line::Expand(left, format!("{prefix}{indent}"), Branch::Lower));
        }

        let right = n
            .right()
            .map(|v| (v, format!("{prefix}{}", branch.indent(Branch::Upper))));

        stack.push(Line::Emit(n, prefix, branch));

        if let Some((right, prefix)) = right {
            stack.push(Line::Expand(right, prefix, Branch::Upper));
        }
    }

    Ok(())
}

impl<T> Display for Tree<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self.root(), f)
    }
}
