//! Parsing of BFV result strings.
//!
//! A result is usually `"<home>:<guest>"`, but the service also serves
//! `"Abse."` (called off), `"n.an."` (a side did not appear; that side's
//! name is printed in parentheses and the match is awarded 2:0 against it)
//! and ruling annotations such as `"2:1 W"`, where everything from the
//! first `w`/`u` on is an amendment note.

use crate::error::{BfvError, Result};

/// Parse a result string into a pair of scores.
///
/// Returns `Ok(None)` when the match has no score: no opponent, an empty
/// result, or a called-off match. Malformed strings are an error naming
/// both teams.
pub fn parse_result(home: &str, guest: Option<&str>, result: &str) -> Result<Option<(u32, u32)>> {
    parse_inner(home, guest, result, true)
}

fn parse_inner(
    home: &str,
    guest: Option<&str>,
    result: &str,
    allow_ruling: bool,
) -> Result<Option<(u32, u32)>> {
    let home_name = home.trim();
    let guest_name = guest.map(str::trim).unwrap_or("");

    if guest_name.is_empty() || result.is_empty() || result == "Abse." {
        // not yet played, called off, or no opponent
        return Ok(None);
    }

    if result == "n.an." {
        if home_name.starts_with('(') && home_name.ends_with(')') {
            return Ok(Some((0, 2)));
        }
        if guest_name.starts_with('(') && guest_name.ends_with(')') {
            return Ok(Some((2, 0)));
        }
        return Err(invalid(home_name, guest_name, result));
    }

    let lowered = result.to_lowercase();
    if let Some(pos) = lowered.find(|c| c == 'w' || c == 'u') {
        // rulings may be stripped once; a bare annotation means no score
        if !allow_ruling {
            return Err(invalid(home_name, guest_name, result));
        }
        return parse_inner(home, guest, lowered[..pos].trim(), false);
    }

    let (home_score, guest_score) = result
        .split_once(':')
        .ok_or_else(|| invalid(home_name, guest_name, result))?;
    match (
        home_score.trim().parse::<u32>(),
        guest_score.trim().parse::<u32>(),
    ) {
        (Ok(h), Ok(g)) => Ok(Some((h, g))),
        _ => Err(invalid(home_name, guest_name, result)),
    }
}

fn invalid(home: &str, guest: &str, result: &str) -> BfvError {
    BfvError::InvalidResult {
        home: home.to_string(),
        guest: guest.to_string(),
        result: result.to_string(),
    }
}
