//! Reason trails: the explainable, parseable record of why a prediction was made.
//!
//! One segment per participating strategy, joined by `"; "`:
//!
//! ```text
//! category "documents" -> "Documents" 3.00/4.00 local=0.750 weight=0.50
//! ```
//!
//! Feature values and destinations are JSON string literals so that any
//! character (quotes, `;`, arrows) survives. Callers that only kept the
//! reason string can rebuild the trail with [`parse_reason`], which is what
//! undo handling relies on.

use std::fmt::Write as _;

use tidy_core::errors::{TidyError, TidyResult};
use tidy_core::{Contribution, ReinforcementKey, Strategy};

const SEGMENT_SEPARATOR: &str = "; ";
const ARROW: &str = " -> ";

/// Render a trail of contributions.
pub fn format_trail(contributions: &[Contribution]) -> String {
    let mut out = String::new();
    for (i, c) in contributions.iter().enumerate() {
        if i > 0 {
            out.push_str(SEGMENT_SEPARATOR);
        }
        let _ = write!(
            out,
            "{} {}{}{} {:.2}/{:.2} local={:.3} weight={:.2}",
            c.strategy,
            quote(&c.value),
            ARROW,
            quote(&c.destination),
            c.count,
            c.total,
            c.local_confidence,
            c.weight,
        );
    }
    out
}

/// Rebuild the contributions recorded in a reason string.
///
/// Numeric fields come back at the precision they were printed with.
pub fn parse_reason(reason: &str) -> TidyResult<Vec<Contribution>> {
    let mut parser = TrailParser::new(reason);
    let mut trail = Vec::new();
    if reason.trim().is_empty() {
        return Ok(trail);
    }
    loop {
        trail.push(parser.contribution()?);
        if parser.at_end() {
            break;
        }
        parser.expect(SEGMENT_SEPARATOR)?;
    }
    Ok(trail)
}

/// Reinforcement keys of the strategies that voted for `destination`.
pub fn supporting_keys(reason: &str, destination: &str) -> TidyResult<Vec<ReinforcementKey>> {
    Ok(parse_reason(reason)?
        .into_iter()
        .filter(|c| c.supports(destination))
        .map(|c| c.key())
        .collect())
}

fn quote(s: &str) -> String {
    // Serializing a &str cannot fail.
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s.escape_default()))
}

struct TrailParser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> TrailParser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn error(&self, details: impl Into<String>) -> TidyError {
        TidyError::InvalidReason {
            offset: self.pos,
            details: details.into(),
        }
    }

    fn expect(&mut self, literal: &str) -> TidyResult<()> {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            Ok(())
        } else {
            Err(self.error(format!("expected {literal:?}")))
        }
    }

    /// Consume up to the next space or `;`.
    fn token(&mut self) -> &'a str {
        let rest = self.rest();
        let end = rest.find([' ', ';']).unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    fn quoted(&mut self) -> TidyResult<String> {
        if !self.rest().starts_with('"') {
            return Err(self.error("expected a quoted string"));
        }
        let mut stream = serde_json::Deserializer::from_str(self.rest()).into_iter::<String>();
        match stream.next() {
            Some(Ok(value)) => {
                self.pos += stream.byte_offset();
                Ok(value)
            }
            Some(Err(e)) => Err(self.error(e.to_string())),
            None => Err(self.error("unterminated string")),
        }
    }

    fn number(&mut self, text: &str) -> TidyResult<f64> {
        text.parse::<f64>()
            .map_err(|_| self.error(format!("invalid number {text:?}")))
    }

    fn prefixed_number(&mut self, prefix: &str) -> TidyResult<f64> {
        self.expect(prefix)?;
        let text = self.token();
        self.number(text)
    }

    fn contribution(&mut self) -> TidyResult<Contribution> {
        let name = self.token();
        let strategy = name
            .parse::<Strategy>()
            .map_err(|_| self.error(format!("unknown strategy {name:?}")))?;
        self.expect(" ")?;
        let value = self.quoted()?;
        self.expect(ARROW)?;
        let destination = self.quoted()?;
        self.expect(" ")?;

        let ratio = self.token();
        let (count, total) = ratio
            .split_once('/')
            .ok_or_else(|| self.error(format!("expected count/total, got {ratio:?}")))?;
        let count = self.number(count)?;
        let total = self.number(total)?;
        self.expect(" ")?;
        let local_confidence = self.prefixed_number("local=")?;
        self.expect(" ")?;
        let weight = self.prefixed_number("weight=")?;

        Ok(Contribution {
            strategy,
            value,
            destination,
            count,
            total,
            local_confidence,
            weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contribution(strategy: Strategy, value: &str, destination: &str) -> Contribution {
        Contribution {
            strategy,
            value: value.to_string(),
            destination: destination.to_string(),
            count: 3.0,
            total: 4.0,
            local_confidence: 0.75,
            weight: 0.5,
        }
    }

    #[test]
    fn formats_documented_shape() {
        let trail = vec![contribution(Strategy::Category, "documents", "Documents")];
        assert_eq!(
            format_trail(&trail),
            r#"category "documents" -> "Documents" 3.00/4.00 local=0.750 weight=0.50"#
        );
    }

    #[test]
    fn parses_what_it_formats() {
        let trail = vec![
            contribution(Strategy::Category, "documents", "Documents"),
            contribution(Strategy::NamePrefix, "invoice", "Finance"),
        ];
        let parsed = parse_reason(&format_trail(&trail)).unwrap();
        assert_eq!(parsed, trail);
    }

    #[test]
    fn awkward_values_survive() {
        let trail = vec![
            contribution(Strategy::NamePrefix, "a; b -> \"c\"", "Dest with spaces"),
            contribution(Strategy::Extension, ".tar", "Ärchive/2024"),
        ];
        let parsed = parse_reason(&format_trail(&trail)).unwrap();
        assert_eq!(parsed[0].value, "a; b -> \"c\"");
        assert_eq!(parsed[0].destination, "Dest with spaces");
        assert_eq!(parsed[1].destination, "Ärchive/2024");
    }

    #[test]
    fn empty_reason_is_empty_trail() {
        assert!(parse_reason("").unwrap().is_empty());
    }

    #[test]
    fn garbage_is_rejected_with_offset() {
        let err = parse_reason(r#"category "documents" => "Documents""#).unwrap_err();
        match err {
            TidyError::InvalidReason { offset, .. } => assert_eq!(offset, 20),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(parse_reason("colour \"red\" -> \"Red\" 1.00/1.00 local=1.000 weight=0.50").is_err());
    }

    #[test]
    fn supporting_keys_filter_by_destination() {
        let trail = vec![
            contribution(Strategy::Category, "documents", "Documents"),
            contribution(Strategy::Extension, ".pdf", "Work"),
        ];
        let keys = supporting_keys(&format_trail(&trail), "Documents").unwrap();
        assert_eq!(
            keys,
            vec![ReinforcementKey::new(Strategy::Category, "documents", "Documents")]
        );
    }
}
