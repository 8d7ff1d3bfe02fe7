//! Tree command implementation
//!
//! Tracks each symbol as a root and expands the tree to a fixed depth.
//! The underlying graph can cycle (recursion, mutual calls), so the depth
//! bound is what ends the walk.
//!
//! @module cli/tree

use crate::cli::Context;
use crate::core::error::Result;
use crate::output::human;
use crate::present::{CollapsibleState, TreeItem};
use crate::tree::{AppendOutcome, ReferenceNode, ReferenceTree};
use clap::Args;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:
    refgraph tree foo            foo's definition and who references it
    refgraph tree foo bar -d 4   Two roots, four levels deep
    refgraph tree 'foo_*'        Wildcard roots start collapsed")]
pub struct TreeArgs {
    /// Symbols to track (most recent first in the output)
    #[arg(required = true)]
    pub symbols: Vec<String>,

    /// Levels to expand below the roots
    #[arg(short, long, default_value = "2")]
    pub depth: usize,
}

/// A projected node with its expanded children
#[derive(Debug, Serialize)]
pub struct RenderedNode {
    #[serde(flatten)]
    pub item: TreeItem,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderedNode>,
}

impl RenderedNode {
    fn flatten_into(&self, depth: usize, rows: &mut Vec<(usize, TreeItem)>) {
        rows.push((depth, self.item.clone()));
        for child in &self.children {
            child.flatten_into(depth + 1, rows);
        }
    }
}

pub fn run(args: TreeArgs, ctx: &Context) -> anyhow::Result<()> {
    let tree = ReferenceTree::new(ctx.engine());

    for symbol in &args.symbols {
        if let AppendOutcome::AlreadyTracked = tree.append_root(symbol)? {
            debug!(%symbol, "Already tracked");
        }
    }

    let roots = tree.roots();
    let rendered = roots
        .iter()
        .map(|root| render(&tree, root, &ctx.workspace.root, args.depth))
        .collect::<Result<Vec<_>>>()?;

    ctx.emit(&rendered, |nodes| {
        let mut rows = Vec::new();
        for node in nodes {
            node.flatten_into(0, &mut rows);
        }
        human::format_tree(&rows)
    });
    Ok(())
}

/// Project `node` and expand it `remaining` more levels
pub fn render(tree: &ReferenceTree, node: &ReferenceNode, root: &Path, remaining: usize) -> Result<RenderedNode> {
    let item = TreeItem::from_node(node, root);

    let children = if remaining == 0 || item.collapsible == CollapsibleState::None {
        Vec::new()
    } else {
        tree.children(node)?
            .iter()
            .map(|child| render(tree, child, root, remaining - 1))
            .collect::<Result<Vec<_>>>()?
    };

    Ok(RenderedNode { item, children })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::engine::Engine;
    use crate::tools::fake::ScriptedRunner;
    use crate::tools::{tagger_args, IndexerQuery};
    use std::sync::Arc;

    const A_TAGS: &str = "\
foo\ta.c\t/^int foo(void) {$/;\"\tfunction\tline:10\tend:20
main\ta.c\t/^int main(void) {$/;\"\tfunction\tline:30\tend:50
";

    #[test]
    fn test_render_depth_bound() {
        let runner = ScriptedRunner::new()
            .on("global", &IndexerQuery::Definitions("foo").args(), "foo 12 a.c   int foo(void) {\n")
            .on("global", &IndexerQuery::References("foo").args(), "foo 40 a.c   return foo();\n")
            .on("ctags", &tagger_args("a.c"), A_TAGS);
        let tree = ReferenceTree::new(Engine::new(Config::default(), Arc::new(runner), "/ws"));
        tree.append_root("foo").unwrap();
        let root = tree.roots()[0].clone();

        let shallow = render(&tree, &root, Path::new("/ws"), 0).unwrap();
        assert!(shallow.children.is_empty());

        let one = render(&tree, &root, Path::new("/ws"), 1).unwrap();
        assert_eq!(one.item.label, "foo");
        assert_eq!(one.children.len(), 1);
        assert_eq!(one.children[0].item.label, "main");
        assert!(one.children[0].children.is_empty());

        let mut rows = Vec::new();
        one.flatten_into(0, &mut rows);
        assert_eq!(human::format_tree(&rows), "foo  a.c:12\n  main  a.c:40\n");
    }
}
