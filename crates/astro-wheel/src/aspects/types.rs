use crate::catalog::BodyId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Named angular relationship, in ascending order of exact angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectKind {
    Conjunction,
    Semisextile,
    Semisquare,
    Sextile,
    Square,
    Trine,
    Sesquisquare,
    Quincunx,
    Opposition,
}

impl AspectKind {
    pub const ALL: [AspectKind; 9] = [
        AspectKind::Conjunction,
        AspectKind::Semisextile,
        AspectKind::Semisquare,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Sesquisquare,
        AspectKind::Quincunx,
        AspectKind::Opposition,
    ];

    pub fn key(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Semisextile => "semisextile",
            AspectKind::Semisquare => "semisquare",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Sesquisquare => "sesquisquare",
            AspectKind::Quincunx => "quincunx",
            AspectKind::Opposition => "opposition",
        }
    }

    /// Conjunction, sextile, square, trine and opposition
    pub fn is_major(self) -> bool {
        matches!(
            self,
            AspectKind::Conjunction
                | AspectKind::Sextile
                | AspectKind::Square
                | AspectKind::Trine
                | AspectKind::Opposition
        )
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AspectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "conjunction" => Ok(AspectKind::Conjunction),
            "semisextile" => Ok(AspectKind::Semisextile),
            "semisquare" => Ok(AspectKind::Semisquare),
            "sextile" => Ok(AspectKind::Sextile),
            "square" => Ok(AspectKind::Square),
            "trine" => Ok(AspectKind::Trine),
            "sesquisquare" | "sesquiquadrate" => Ok(AspectKind::Sesquisquare),
            "quincunx" | "inconjunct" => Ok(AspectKind::Quincunx),
            "opposition" => Ok(AspectKind::Opposition),
            _ => Err(s.to_string()),
        }
    }
}

/// Qualitative nature of an aspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nature {
    Harmonious,
    Challenging,
    Neutral,
}

/// Static catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    /// Exact angle in degrees
    pub angle: f64,
    /// Maximum deviation from the exact angle, before policy adjustments
    pub base_orb: f64,
    pub nature: Nature,
    pub symbol: &'static str,
    pub description: &'static str,
}

/// Result of matching two longitudes against the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub kind: AspectKind,
    pub nature: Nature,
    pub exact_angle: f64,
    /// Shortest-arc distance between the two bodies
    pub distance: f64,
    /// Deviation from the exact angle
    pub orb: f64,
    /// Orb limit the pair was judged against
    pub max_orb: f64,
    pub strength: f64,
    pub is_applying: bool,
    pub is_exact: bool,
}

/// Reference to one side of an aspect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectObjectRef {
    pub chart: String,
    pub body: BodyId,
    pub longitude: f64,
}

/// Aspect pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectPair {
    pub from: AspectObjectRef,
    pub to: AspectObjectRef,
    pub aspect: Aspect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectSetKind {
    IntraChart,
    InterChart,
}

/// Row body to column body to the aspect between them, if any
pub type AspectGrid<'a> = BTreeMap<BodyId, BTreeMap<BodyId, Option<&'a AspectPair>>>;

/// Aspect set (collection of aspect pairs)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectSet {
    pub id: String,
    pub label: String,
    pub kind: AspectSetKind,
    pub charts: Vec<String>,
    pub pairs: Vec<AspectPair>,
}

impl AspectSet {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn filtered(&self, keep: impl Fn(&AspectPair) -> bool) -> Vec<&AspectPair> {
        self.pairs.iter().filter(|p| keep(*p)).collect()
    }

    /// Pairs at or above a strength threshold
    pub fn filter_by_strength(&self, min_strength: f64) -> Vec<&AspectPair> {
        self.filtered(|p| p.aspect.strength >= min_strength)
    }

    pub fn major(&self) -> Vec<&AspectPair> {
        self.filtered(|p| p.aspect.kind.is_major())
    }

    pub fn minor(&self) -> Vec<&AspectPair> {
        self.filtered(|p| !p.aspect.kind.is_major())
    }

    pub fn harmonious(&self) -> Vec<&AspectPair> {
        self.filtered(|p| p.aspect.nature == Nature::Harmonious)
    }

    pub fn challenging(&self) -> Vec<&AspectPair> {
        self.filtered(|p| p.aspect.nature == Nature::Challenging)
    }

    pub fn involving(&self, body: BodyId) -> Vec<&AspectPair> {
        self.filtered(|p| p.from.body == body || p.to.body == body)
    }

    pub fn group_by_kind(&self) -> BTreeMap<AspectKind, Vec<&AspectPair>> {
        let mut groups: BTreeMap<AspectKind, Vec<&AspectPair>> = BTreeMap::new();
        for pair in &self.pairs {
            groups.entry(pair.aspect.kind).or_default().push(pair);
        }
        groups
    }

    /// Every pair of `bodies` mapped to its aspect, or `None` when there is none.
    ///
    /// An intra-chart grid is symmetric. An inter-chart grid is not mirrored:
    /// rows are bodies of the first chart and columns bodies of the second.
    pub fn grid(&self, bodies: &[BodyId]) -> AspectGrid<'_> {
        let mut grid: AspectGrid<'_> = bodies
            .iter()
            .map(|&row| (row, bodies.iter().map(|&col| (col, None)).collect()))
            .collect();
        let symmetric = self.kind == AspectSetKind::IntraChart;

        for pair in &self.pairs {
            let (from, to) = (pair.from.body, pair.to.body);
            if let Some(cell) = grid.get_mut(&from).and_then(|row| row.get_mut(&to)) {
                *cell = Some(pair);
            }
            if symmetric {
                if let Some(cell) = grid.get_mut(&to).and_then(|row| row.get_mut(&from)) {
                    *cell = Some(pair);
                }
            }
        }
        grid
    }

    pub fn count_by_kind(&self) -> BTreeMap<AspectKind, usize> {
        let mut counts = BTreeMap::new();
        for pair in &self.pairs {
            *counts.entry(pair.aspect.kind).or_insert(0) += 1;
        }
        counts
    }
}
