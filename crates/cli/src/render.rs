//! Text rendering of widget state.

use chainlab_core::{
    block_label, ChainStrip, DigestTree, LedgerRing, Outcome, PlatformStat, Snapshot, NODE_COUNT,
};
use colored::Colorize;
use std::fmt::Write;

/// Placeholder shown where a derived label is absent.
const ABSENT: &str = "·";

/// Width of the throughput bars at 100 %.
const BAR_WIDTH: usize = 40;

fn label_or_absent(label: Option<&str>) -> String {
    match label {
        Some(l) => l.yellow().to_string(),
        None => ABSENT.bright_black().to_string(),
    }
}

fn edge(visible: bool, glyph: &str) -> String {
    if visible {
        glyph.yellow().to_string()
    } else {
        " ".to_string()
    }
}

/// Render the Merkle builder as a small tree with its pool.
pub fn tree(snapshot: &Snapshot) -> String {
    let labels = &snapshot.labels;
    let edges = &snapshot.edges;
    let mut out = String::new();

    let root = match &labels.root {
        Some(r) => r.yellow().bold().to_string(),
        None => ABSENT.bright_black().to_string(),
    };
    let _ = writeln!(out, "  {:<9}{}", "root", root);
    let _ = writeln!(
        out,
        "  {:<9}{}  {}",
        "",
        edge(edges.parent_edges[0], "/"),
        edge(edges.parent_edges[1], "\\"),
    );
    let _ = writeln!(
        out,
        "  {:<9}{}  {}",
        "parents",
        label_or_absent(labels.left.as_deref()),
        label_or_absent(labels.right.as_deref()),
    );
    let _ = writeln!(
        out,
        "  {:<9}{} {}  {} {}",
        "",
        edge(edges.leaf_edges[0], "/"),
        edge(edges.leaf_edges[1], "\\"),
        edge(edges.leaf_edges[2], "/"),
        edge(edges.leaf_edges[3], "\\"),
    );

    let leaves: Vec<String> = snapshot
        .slots
        .iter()
        .map(|slot| match slot {
            Some(s) => format!("[{}]", s).bright_cyan().bold().to_string(),
            None => "[?]".bright_black().to_string(),
        })
        .collect();
    let _ = writeln!(out, "  {:<9}{}", "leaves", leaves.join(" "));

    let pool = if snapshot.pool.is_empty() {
        "(empty)".bright_black().to_string()
    } else {
        snapshot
            .pool
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    let _ = write!(out, "  {:<9}{}", "pool", pool);

    out
}

/// One line describing an action outcome.
pub fn outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Ignored { .. } => format!("{}  {}", "·".bright_black(), outcome),
        _ => format!("{}  {}", "✓".green().bold(), outcome),
    }
}

/// The real digest tree, or a notice that it needs a full set of leaves.
pub fn digest(tree: Option<&DigestTree>) -> String {
    let Some(tree) = tree else {
        return format!(
            "{}",
            "Real Blake3 root needs all four leaves.".bright_black()
        );
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", "Blake3 digests:".bold());
    let _ = writeln!(out, "  root     {}", tree.root.to_string().bright_yellow());
    for (i, p) in tree.parents.iter().enumerate() {
        let _ = writeln!(out, "  parent {} 0x{}", i, p.short().bright_black());
    }
    let leaves: Vec<String> = tree
        .leaves
        .iter()
        .map(|l| format!("0x{}", l.short()))
        .collect();
    let _ = write!(out, "  leaves   {}", leaves.join(" ").bright_black());
    out
}

/// The chain strip as a row of linked blocks.
pub fn chain(strip: &ChainStrip) -> String {
    let blocks: Vec<String> = strip
        .blocks()
        .iter()
        .map(|n| format!("[Block {}]", n).green().to_string())
        .collect();
    let link = "──".green().to_string();
    let mut row = blocks.join(link.as_str());
    if strip.can_grow() {
        let _ = write!(row, " {}", "[ + ]".bright_black());
    }

    let mut out = String::new();
    let _ = writeln!(out, "  {}", row);
    for n in strip.blocks() {
        let _ = writeln!(out, "    {}", block_label(*n).bright_black());
    }
    let _ = write!(
        out,
        "  {} blocks, {} links",
        strip.len().to_string().bright_cyan(),
        strip.connectors()
    );
    out
}

/// Node positions on the ledger ring.
pub fn ledger(ring: &LedgerRing) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {:<6}{:>8}{:>8}", "node", "top%", "left%");
    for (i, p) in ring.positions().iter().enumerate() {
        let marker = if ring.hovered() == Some(i) {
            "●".bright_blue().bold().to_string()
        } else {
            "●".blue().to_string()
        };
        let _ = writeln!(out, "  {} {:<4}{:>8.1}{:>8.1}", marker, i, p.top, p.left);
    }
    let _ = write!(
        out,
        "  {} nodes, synced {} time(s)",
        NODE_COUNT,
        ring.pulses().to_string().bright_cyan()
    );
    out
}

/// Horizontal bar chart of platform throughput.
pub fn speed(stats: &[PlatformStat]) -> String {
    let lines: Vec<String> = stats
        .iter()
        .map(|s| {
            let width = BAR_WIDTH * s.height as usize / 100;
            format!(
                "  {:<5}{} {} TPS ({})",
                s.label.bold(),
                "█".repeat(width).bright_cyan(),
                s.tps,
                s.detail.bright_black()
            )
        })
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainlab_core::{tree_digest, MerkleBuilder, Symbol, PLATFORMS};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_tree_partial() {
        plain();
        let mut builder = MerkleBuilder::new();
        builder.place_symbol(Symbol::A);
        builder.place_symbol(Symbol::B);
        let text = tree(&builder.snapshot());

        assert!(text.contains("H(AB)"));
        assert!(text.contains("[A] [B] [?] [?]"));
        assert!(text.contains("pool     C D E F"));
        assert!(!text.contains("H(ABCD)"));
    }

    #[test]
    fn test_tree_full_pool_line() {
        plain();
        let mut builder = MerkleBuilder::new();
        for s in [Symbol::A, Symbol::B, Symbol::C, Symbol::D] {
            builder.place_symbol(s);
        }
        let text = tree(&builder.snapshot());
        assert!(text.contains("root     H(ABCD)"));
        assert!(text.contains("pool     E F"));
    }

    #[test]
    fn test_digest_notice() {
        plain();
        assert!(digest(None).contains("needs all four leaves"));

        let tree = tree_digest(&[Some(Symbol::A), Some(Symbol::B), Some(Symbol::C), Some(Symbol::D)]);
        let text = digest(tree.as_ref());
        assert!(text.contains(&tree.unwrap().root.to_string()));
    }

    #[test]
    fn test_chain_strip() {
        plain();
        let mut strip = ChainStrip::new();
        strip.add_block();
        let text = chain(&strip);
        assert!(text.contains("[Block 1]──[Block 2] [ + ]"));
        assert!(text.contains("Hash: 2x3f9a"));
    }

    #[test]
    fn test_speed_chart() {
        plain();
        let text = speed(&PLATFORMS);
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("Thousands TPS (Solana)"));
    }
}
