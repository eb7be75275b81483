//! Throughput comparison between platforms.

use serde::Serialize;

/// One bar of the comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformStat {
    pub label: &'static str,
    /// Bar height as a percentage of the chart.
    pub height: u8,
    pub tps: &'static str,
    pub detail: &'static str,
}

/// Platforms shown in the chart, slowest first.
pub static PLATFORMS: [PlatformStat; 3] = [
    PlatformStat {
        label: "ETH",
        height: 30,
        tps: "~15-30",
        detail: "Ethereum L1",
    },
    PlatformStat {
        label: "ALGO",
        height: 60,
        tps: "~10K",
        detail: "Algorand",
    },
    PlatformStat {
        label: "SOL",
        height: 95,
        tps: "Thousands",
        detail: "Solana",
    },
];

/// Find a platform by label, ignoring case.
pub fn platform(label: &str) -> Option<&'static PlatformStat> {
    PLATFORMS
        .iter()
        .find(|p| p.label.eq_ignore_ascii_case(label))
}
