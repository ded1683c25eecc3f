// web_app/view/review.rs - Highlighted review text
//
// Reviews arrive with inline annotation spans marking the passages the
// backend matched. Instead of passing that markup to the browser, a review
// is parsed into plain and highlighted segments; only the segment kind
// reaches the DOM, and every segment is rendered as escaped text.

/// Canonical highlight markup produced by `ReviewText::to_markup`
pub const HIGHLIGHT_OPEN: &str = "<mark>";
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

/// Opening/closing pairs recognized as a highlight.
const HIGHLIGHT_TAGS: [(&str, &str); 5] = [
    ("<span className='annotation'>", "</span>"),
    ("<span className=\"annotation\">", "</span>"),
    ("<span class='annotation'>", "</span>"),
    ("<span class=\"annotation\">", "</span>"),
    (HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Highlight(String),
}

/// A review as a sequence of plain and highlighted runs.
///
/// Adjacent plain runs are always merged, so two texts that read the same
/// compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewText {
    segments: Vec<Segment>,
}

impl ReviewText {
    /// Parses raw review text.
    ///
    /// A recognized opening tag becomes a highlight when its closing tag
    /// follows and the enclosed text holds no other recognized tag.
    /// Anything else, including unmatched tags, stays literal text.
    pub fn parse(raw: &str) -> Self {
        let mut text = ReviewText::default();
        let mut rest = raw;

        while let Some((start, open, close)) = next_open_tag(rest) {
            text.push_plain(&rest[..start]);
            let after_open = &rest[start + open.len()..];

            match after_open.find(close) {
                Some(end) if !contains_tag(&after_open[..end]) => {
                    text.push_highlight(&after_open[..end]);
                    rest = &after_open[end + close.len()..];
                }
                _ => {
                    text.push_plain(open);
                    rest = after_open;
                }
            }
        }

        text.push_plain(rest);
        text
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn has_highlight(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Highlight(_)))
    }

    /// The review with all markup removed
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Plain(text) | Segment::Highlight(text) => text.as_str(),
            })
            .collect()
    }

    /// Serializes back to markup using the canonical highlight tag.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain(text) => out.push_str(text),
                Segment::Highlight(text) => {
                    out.push_str(HIGHLIGHT_OPEN);
                    out.push_str(text);
                    out.push_str(HIGHLIGHT_CLOSE);
                }
            }
        }
        out
    }

    fn push_plain(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(Segment::Plain(last)) => last.push_str(text),
            _ => self.segments.push(Segment::Plain(text.to_string())),
        }
    }

    fn push_highlight(&mut self, text: &str) {
        self.segments.push(Segment::Highlight(text.to_string()));
    }
}

/// Rewrites annotation spans to the canonical highlight markup.
///
/// Idempotent: rewriting the output again yields the same string.
pub fn highlight_annotations(raw: &str) -> String {
    ReviewText::parse(raw).to_markup()
}

fn next_open_tag(text: &str) -> Option<(usize, &'static str, &'static str)> {
    HIGHLIGHT_TAGS
        .iter()
        .filter_map(|&(open, close)| text.find(open).map(|pos| (pos, open, close)))
        .min_by_key(|&(pos, _, _)| pos)
}

fn contains_tag(text: &str) -> bool {
    HIGHLIGHT_TAGS
        .iter()
        .any(|(open, close)| text.contains(open) || text.contains(close))
}
