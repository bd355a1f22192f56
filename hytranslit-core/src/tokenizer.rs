//! Text segmentation
//!
//! Input is split into alternating runs: clusters of Armenian letters,
//! digits and Armenian punctuation that are kept together, and everything
//! in between (whitespace, other scripts, other symbols), which is carried
//! through verbatim. Concatenating the segments yields the input exactly.

use std::sync::OnceLock;

use regex::Regex;

/// Armenian letters, ligatures, Armenian punctuation, guillemets and digits
const CLUSTER_PATTERN: &str =
    r"[\x{0531}-\x{0556}\x{0561}-\x{0587}\x{FB13}-\x{FB17}\x{055A}-\x{055F}\x{0589}\x{058A}«»0-9]+";

static CLUSTER: OnceLock<Regex> = OnceLock::new();

fn cluster_regex() -> &'static Regex {
    CLUSTER.get_or_init(|| Regex::new(CLUSTER_PATTERN).expect("cluster pattern is valid"))
}

/// Kind of a segment
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    /// Run matched by the cluster pattern
    Cluster,
    /// Anything between clusters
    Delimiter,
}

/// A borrowed slice of the input
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub kind: SegmentKind,
}

/// Iterator over the segments of a text
pub struct Segments<'a> {
    text: &'a str,
    matches: regex::Matches<'static, 'a>,
    /// Byte offset of the first unread byte
    pos: usize,
    /// Cluster found ahead of a pending delimiter
    pending: Option<(usize, usize)>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, end) = match self.pending.take() {
            Some(span) => span,
            None => match self.matches.next() {
                Some(m) => (m.start(), m.end()),
                None => {
                    if self.pos < self.text.len() {
                        let rest = &self.text[self.pos..];
                        self.pos = self.text.len();
                        return Some(Segment {
                            text: rest,
                            kind: SegmentKind::Delimiter,
                        });
                    }
                    return None;
                }
            },
        };

        if start > self.pos {
            let gap = &self.text[self.pos..start];
            self.pos = start;
            self.pending = Some((start, end));
            return Some(Segment {
                text: gap,
                kind: SegmentKind::Delimiter,
            });
        }

        self.pos = end;
        Some(Segment {
            text: &self.text[start..end],
            kind: SegmentKind::Cluster,
        })
    }
}

/// Split `text` into segments, in order
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        text,
        matches: cluster_regex().find_iter(text),
        pos: 0,
        pending: None,
    }
}
